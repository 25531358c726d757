use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::request_log::{LoggedRequest, RequestLog};
use crate::theme;

pub fn render_requests(log: &RequestLog, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Requests ({}) ", log.len()))
        .border_style(Style::default().fg(theme::requests::BORDER))
        .style(Style::default().bg(theme::requests::BACKGROUND));

    if log.is_empty() {
        let empty = Line::from(Span::styled(
            " No searches yet",
            Style::default().fg(theme::requests::EMPTY),
        ));
        frame.render_widget(Paragraph::new(empty).block(block), area);
        return;
    }

    let lines: Vec<Line> = log
        .entries()
        .enumerate()
        .map(|(i, entry)| {
            let color = match entry {
                LoggedRequest::Navigate(_) => theme::requests::NAVIGATION,
                LoggedRequest::Search(_) if i == 0 => theme::requests::LATEST,
                LoggedRequest::Search(_) => theme::requests::OLDER,
            };
            let text = match entry {
                LoggedRequest::Search(criteria) => format!(" {}", criteria),
                LoggedRequest::Navigate(entity) => format!(" → open new {} form", entity),
            };
            Line::from(Span::styled(text, Style::default().fg(color)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{SearchCriteria, SearchField};
    use crate::entity::EntityKind;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(log: &RequestLog) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_requests(log, f, area)
            })
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_empty_log() {
        let output = render(&RequestLog::new());
        assert!(output.contains("Requests (0)"));
        assert!(output.contains("No searches yet"));
    }

    #[test]
    fn test_search_and_navigation_entries() {
        let mut log = RequestLog::new();
        let mut criteria = SearchCriteria::new(EntityKind::Lead, 42);
        criteria.set("lead-name", SearchField::and("Acme"));
        log.push(LoggedRequest::Search(criteria));
        log.push(LoggedRequest::Navigate(EntityKind::Lead));

        let output = render(&log);
        assert!(output.contains("Requests (2)"));
        assert!(output.contains("saccountid = 42"));
        assert!(output.contains("open new lead form"));
    }
}
