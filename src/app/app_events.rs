use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::panel;
use crate::saved_filter;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                _ => {}
            }
        }
        self.poll_panel_events();
        Ok(())
    }

    fn handle_paste_event(&mut self, text: &str) {
        // Inputs are single-line
        let text = text.replace(['\r', '\n'], " ");
        if let Some(input) = self.panel.layout_mut().focused_input_mut() {
            input.insert_str(text);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let result = match saved_filter::handle_saved_filter_key(&mut self.panel, key) {
            Ok(true) => Ok(true),
            Ok(false) if global::handle_global_keys(self, key) => Ok(true),
            Ok(false) => panel::handle_panel_key(&mut self.panel, key),
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            self.report(&e);
        }

        self.poll_panel_events();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
