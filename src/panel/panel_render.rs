use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::header::DisplayHeader;
use super::layout::{ControlView, LayoutBody, WidgetView};
use super::panel_state::SearchPanel;
use crate::context::{AppContext, MessageKey};
use crate::theme;

pub const HEADER_HEIGHT: u16 = 3;
const INPUT_WIDTH: usize = 28;

/// Rows needed to show the whole panel without scrolling
pub fn panel_height(body: &LayoutBody) -> u16 {
    HEADER_HEIGHT + body.rows.len() as u16 + 2
}

pub fn render_panel<C: AppContext>(panel: &mut SearchPanel<C>, frame: &mut Frame, area: Rect) {
    let header = panel.build_title();
    let body = panel.body();
    let body_title = if panel.layout().is_advanced() {
        panel.context().message(MessageKey::ButtonAdvancedSearch)
    } else {
        panel.context().message(MessageKey::ButtonBasicSearch)
    };

    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).areas(area);

    render_header(&header, frame, header_area);
    render_body(&body, &body_title, frame, body_area);
}

fn render_header(header: &DisplayHeader, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", header.icon), Style::default().fg(theme::header::ICON)),
        Span::styled(format!("{} ", header.title), theme::header::TITLE),
    ]);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme::header::BORDER))
        .style(Style::default().bg(theme::header::BACKGROUND));

    if let Some(action) = &header.create_action {
        let color = if action.enabled {
            theme::header::ACTION_ENABLED
        } else {
            theme::header::ACTION_DISABLED
        };
        block = block.title_top(
            Line::from(Span::styled(
                format!(" [+ {}] ", action.label),
                Style::default().fg(color),
            ))
            .alignment(Alignment::Right),
        );
    }

    let content = match &header.saved_filter {
        Some(label) => Line::from(vec![
            Span::styled(" Filter: ", Style::default().fg(theme::panel::LABEL)),
            Span::styled(
                format!("{} ▾", label),
                Style::default().fg(theme::header::SAVED_FILTER),
            ),
        ]),
        None => Line::default(),
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_body(body: &LayoutBody, title: &str, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(theme::panel::BORDER))
        .style(Style::default().bg(theme::panel::BACKGROUND));

    let inner_height = block.inner(area).height as usize;

    let label_width = body
        .rows
        .iter()
        .flatten()
        .filter_map(|c| c.label.as_ref())
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = body
        .rows
        .iter()
        .map(|row| row_line(row, label_width))
        .collect();

    // Keep the focused row on screen
    let scroll = match body.focused_row() {
        Some(row) if inner_height > 0 && row >= inner_height => row + 1 - inner_height,
        _ => 0,
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0)),
        area,
    );
}

fn row_line(row: &[ControlView], label_width: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];

    for (i, control) in row.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        if let Some(label) = &control.label {
            spans.push(Span::styled(
                format!("{:>width$}: ", label, width = label_width),
                Style::default().fg(theme::panel::LABEL),
            ));
        }
        spans.extend(widget_spans(&control.widget, control.focused));
    }

    Line::from(spans)
}

fn focus_style(style: Style, focused: bool) -> Style {
    if focused {
        style
            .bg(theme::panel::FOCUSED_BG)
            .add_modifier(theme::panel::FOCUSED_MODIFIER)
    } else {
        style
    }
}

fn widget_spans(widget: &WidgetView, focused: bool) -> Vec<Span<'static>> {
    match widget {
        WidgetView::TextInput {
            value,
            prompt,
            cursor,
            operator,
        } => {
            let mut spans = Vec::new();
            if let Some(op) = operator {
                spans.push(Span::styled(
                    format!("{:<6} ", op),
                    Style::default().fg(theme::panel::OPERATOR),
                ));
            }
            spans.push(Span::raw("["));
            spans.extend(input_spans(value, prompt, *cursor, focused));
            spans.push(Span::raw("]"));
            spans
        }
        WidgetView::Checkbox { label, checked } => {
            let mark = if *checked { "[x]" } else { "[ ]" };
            vec![Span::styled(
                format!("{} {}", mark, label),
                focus_style(Style::default().fg(theme::panel::INPUT_TEXT), focused),
            )]
        }
        WidgetView::Button { label } => vec![Span::styled(
            format!("[ {} ]", label),
            focus_style(Style::default().fg(theme::panel::BUTTON), focused),
        )],
        WidgetView::Link { label } => vec![Span::styled(
            format!("» {}", label),
            focus_style(
                Style::default()
                    .fg(theme::panel::LINK)
                    .add_modifier(Modifier::UNDERLINED),
                focused,
            ),
        )],
        WidgetView::Options { options, cursor } => {
            let mut spans = Vec::new();
            for (i, (option, checked)) in options.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                let (mark, color) = if *checked {
                    ("[x]", theme::panel::OPTION_CHECKED)
                } else {
                    ("[ ]", theme::panel::OPTION_UNCHECKED)
                };
                spans.push(Span::styled(
                    format!("{} {}", mark, option),
                    focus_style(Style::default().fg(color), focused && i == *cursor),
                ));
            }
            spans
        }
    }
}

fn input_spans(value: &str, prompt: &str, cursor: usize, focused: bool) -> Vec<Span<'static>> {
    let base = focus_style(Style::default().fg(theme::panel::INPUT_TEXT), focused);
    let chars: Vec<char> = value.chars().collect();
    let width = INPUT_WIDTH.max(chars.len() + 1);

    if chars.is_empty() {
        let prompt: String = prompt.chars().take(width).collect();
        let prompt_style = focus_style(Style::default().fg(theme::panel::PROMPT), focused);
        if !focused {
            return vec![Span::styled(format!("{:<width$}", prompt), prompt_style)];
        }
        let rest: String = prompt.chars().skip(1).collect();
        let first = prompt.chars().next().unwrap_or(' ');
        return vec![
            Span::styled(first.to_string(), theme::palette::CURSOR),
            Span::styled(format!("{:<w$}", rest, w = width - 1), prompt_style),
        ];
    }

    if !focused {
        return vec![Span::styled(format!("{:<width$}", value), base)];
    }

    let cursor = cursor.min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let at = chars.get(cursor).copied().unwrap_or(' ');
    let after: String = chars.iter().skip(cursor + 1).collect();
    let used = cursor + 1 + after.chars().count();

    vec![
        Span::styled(before, base),
        Span::styled(at.to_string(), theme::palette::CURSOR),
        Span::styled(format!("{}{}", after, " ".repeat(width.saturating_sub(used))), base),
    ]
}

#[cfg(test)]
#[path = "panel_render_tests.rs"]
mod panel_render_tests;
