use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::{App, OutputMode};

/// Keys that work regardless of focus. Returns true when consumed.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return true;
            }
            KeyCode::Char('o') => {
                app.output_mode = Some(OutputMode::Criteria);
                app.should_quit = true;
                return true;
            }
            _ => return false,
        }
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            true
        }
        KeyCode::F(2) => {
            if app.panel.saved_filters().is_empty() {
                let entity = app.panel.entity();
                app.notification
                    .show_warning(&format!("No saved filters for {}s", entity));
            } else {
                app.panel.saved_filters_mut().open();
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
