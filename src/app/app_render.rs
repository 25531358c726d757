use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::panel::{panel_height, render_panel};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let panel_rows = panel_height(&self.panel.body());

        let layout = Layout::vertical([
            Constraint::Length(panel_rows),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (panel_area, requests_area, help_area) = (layout[0], layout[1], layout[2]);

        render_panel(&mut self.panel, frame, panel_area);
        crate::requests::render_requests(&self.requests, frame, requests_area);
        crate::help_line::render_line(self, frame, help_area);

        if self.panel.saved_filters().is_visible() {
            crate::saved_filter::render_popup(self.panel.saved_filters(), frame, panel_area);
        }

        // Notification last so it sits on top
        render_notification(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
