use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Center a `width` x `height` box inside `area`, clamped to fit
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Place a box in the top-right corner of `area`, `margin` cells from the edges
pub fn top_right_corner(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(margin * 2));
    let height = height.min(area.height.saturating_sub(margin * 2));

    Rect {
        x: area.x + area.width.saturating_sub(width + margin),
        y: area.y + margin,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
