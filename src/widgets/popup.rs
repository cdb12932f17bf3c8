use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Centered popup inside `frame_area`, shrunk to fit.
pub fn centered(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + (frame_area.width - width) / 2,
        y: frame_area.y + (frame_area.height - height) / 2,
        width,
        height,
    }
}

/// Popup anchored just below `cell` (absolute coordinates), clamped so it
/// never extends past the right or bottom edge of `bounds`.
pub fn below_cell(bounds: Rect, cell: (u16, u16), width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let right = bounds.x + bounds.width;
    let bottom = bounds.y + bounds.height;

    let mut x = cell.0.max(bounds.x);
    let mut y = cell.1.saturating_add(1).max(bounds.y);
    if x + width > right {
        x = right - width;
    }
    if y + height > bottom {
        y = bottom - height;
    }

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
