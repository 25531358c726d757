//! Entity search panels
//!
//! A panel shows either the basic layout (name + "my items") or the
//! advanced layout (one control per field descriptor) and posts a scoped
//! search request whenever the user submits.

mod advanced_layout;
mod basic_layout;
mod control;
mod header;
mod layout;
mod panel_events;
mod panel_render;
mod panel_state;

pub use advanced_layout::{AdvancedFocus, AdvancedLayout, ParamRow};
pub use basic_layout::{BasicFocus, BasicLayout};
pub use control::{Control, OptionSelect};
pub use header::{DisplayHeader, HeaderAction};
pub use layout::{ActiveLayout, ControlView, LayoutAction, LayoutBody, SearchLayout, WidgetView};
pub use panel_events::handle_panel_key;
pub use panel_render::{panel_height, render_panel};
pub use panel_state::SearchPanel;
