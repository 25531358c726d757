use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::saved_filter_state::SavedFilterState;
use crate::theme;
use crate::widgets::popup;

const POPUP_MIN_WIDTH: u16 = 24;
const POPUP_MAX_HEIGHT: u16 = 12;

/// Render the saved filter list centered over `area`
pub fn render_popup(state: &SavedFilterState, frame: &mut Frame, area: Rect) {
    if !state.is_visible() {
        return;
    }

    let longest = state
        .filters()
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0) as u16;
    let width = (longest + 6).max(POPUP_MIN_WIDTH);
    let height = (state.filters().len() as u16 + 2).min(POPUP_MAX_HEIGHT);

    let popup_area = popup::centered_popup(area, width, height);
    popup::clear_area(frame, popup_area);

    let visible_rows = popup_area.height.saturating_sub(2) as usize;
    let skip = state.cursor().saturating_sub(visible_rows.saturating_sub(1));

    let lines: Vec<Line> = state
        .filters()
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible_rows)
        .map(|(i, filter)| {
            let style = if i == state.cursor() {
                Style::default()
                    .fg(theme::saved_filter::ITEM_SELECTED_FG)
                    .bg(theme::saved_filter::ITEM_SELECTED_BG)
                    .add_modifier(theme::saved_filter::ITEM_SELECTED_MODIFIER)
            } else {
                Style::default().fg(theme::saved_filter::ITEM_NORMAL_FG)
            };
            Line::from(Span::styled(format!(" {} ", filter.name), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Saved Filters ")
        .border_style(Style::default().fg(theme::saved_filter::BORDER))
        .style(Style::default().bg(theme::saved_filter::BACKGROUND));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::saved_filter::SavedFilter;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(state: &SavedFilterState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_popup(state, f, area)
            })
            .unwrap();
        terminal.backend().to_string()
    }

    fn state_with(names: &[&str]) -> SavedFilterState {
        let filters: Vec<SavedFilter> = names
            .iter()
            .map(|name| SavedFilter {
                name: name.to_string(),
                entity: EntityKind::Task,
                fields: Vec::new(),
            })
            .collect();
        SavedFilterState::new(EntityKind::Task, &filters)
    }

    #[test]
    fn test_hidden_popup_renders_nothing() {
        let state = state_with(&["Open tasks"]);
        let output = render_to_string(&state, 60, 12);
        assert!(!output.contains("Saved Filters"));
    }

    #[test]
    fn test_visible_popup_lists_filters() {
        let mut state = state_with(&["Open tasks", "Overdue"]);
        state.open();
        let output = render_to_string(&state, 60, 12);
        assert!(output.contains("Saved Filters"));
        assert!(output.contains("Open tasks"));
        assert!(output.contains("Overdue"));
    }

    #[test]
    fn test_popup_scrolls_to_cursor() {
        let names: Vec<String> = (0..20).map(|i| format!("Filter {:02}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);
        state.open();
        for _ in 0..15 {
            state.select_next();
        }
        let output = render_to_string(&state, 60, 20);
        assert!(output.contains("Filter 15"));
        assert!(!output.contains("Filter 00"));
    }
}
