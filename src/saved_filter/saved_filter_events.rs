use crossterm::event::{KeyCode, KeyEvent};

use crate::context::AppContext;
use crate::error::CrmfindError;
use crate::panel::SearchPanel;

/// Keys while the saved filter popup is open. The popup is modal, so every
/// key is consumed.
pub fn handle_saved_filter_key<C: AppContext>(
    panel: &mut SearchPanel<C>,
    key: KeyEvent,
) -> Result<bool, CrmfindError> {
    if !panel.saved_filters().is_visible() {
        return Ok(false);
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab => panel.saved_filters_mut().select_prev(),
        KeyCode::Down | KeyCode::Tab => panel.saved_filters_mut().select_next(),
        KeyCode::Enter => {
            panel.confirm_saved_filter()?;
        }
        KeyCode::Esc | KeyCode::F(2) => panel.saved_filters_mut().close(),
        _ => {}
    }
    Ok(true)
}
