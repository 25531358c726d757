//! Saved filter module
//!
//! Named, pre-built field/value sets loaded from the config file. Picking one
//! from the popup runs it as a search against the current scope.

mod saved_filter_events;
mod saved_filter_render;
mod saved_filter_state;

pub use saved_filter_events::handle_saved_filter_key;
pub use saved_filter_render::render_popup;
pub use saved_filter_state::{SavedFilter, SavedFilterState};
