use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::layout::LayoutAction;
use super::panel_state::SearchPanel;
use crate::context::AppContext;
use crate::error::CrmfindError;

/// Handle a key aimed at the panel.
///
/// Returns `Ok(true)` when the key was consumed. Errors only come from a
/// closed event channel.
pub fn handle_panel_key<C: AppContext>(
    panel: &mut SearchPanel<C>,
    key: KeyEvent,
) -> Result<bool, CrmfindError> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => {
                panel.toggle_layout();
                Ok(true)
            }
            KeyCode::Char('n') => panel.press_create(),
            KeyCode::Char('t') => {
                panel.layout_mut().cycle_operator();
                Ok(true)
            }
            _ => Ok(false),
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            panel.layout_mut().focus_next();
            return Ok(true);
        }
        KeyCode::BackTab | KeyCode::Up => {
            panel.layout_mut().focus_prev();
            return Ok(true);
        }
        KeyCode::Enter => {
            let action = panel.layout_mut().activate();
            apply_action(panel, action)?;
            return Ok(true);
        }
        _ => {}
    }

    // Typing goes to the focused input
    if let Some(input) = panel.layout_mut().focused_input_mut() {
        input.input(key);
        return Ok(true);
    }

    match key.code {
        KeyCode::Char(' ') => {
            let action = panel.layout_mut().press_space();
            apply_action(panel, action)?;
            Ok(true)
        }
        KeyCode::Left => Ok(panel.layout_mut().move_option(false)),
        KeyCode::Right => Ok(panel.layout_mut().move_option(true)),
        _ => Ok(false),
    }
}

fn apply_action<C: AppContext>(
    panel: &mut SearchPanel<C>,
    action: LayoutAction,
) -> Result<(), CrmfindError> {
    match action {
        LayoutAction::Submit => panel.submit_search(),
        LayoutAction::SwitchLayout => {
            panel.toggle_layout();
            Ok(())
        }
        LayoutAction::Handled => Ok(()),
    }
}

#[cfg(test)]
#[path = "panel_events_tests.rs"]
mod panel_events_tests;
