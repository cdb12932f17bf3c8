//! Ghost-text overlay rendering
//!
//! The suggestion is painted in a muted bordered box just below the caret,
//! never wider than the editor pane. It is purely visual — the buffer is
//! untouched until the suggestion is accepted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::widgets::popup;

use super::state::Suggestion;

/// Border + one cell of horizontal padding on each side
const CHROME_WIDTH: u16 = 4;
const CHROME_HEIGHT: u16 = 2;

pub fn render_ghost(
    frame: &mut Frame,
    editor_area: Rect,
    caret_cell: (u16, u16),
    suggestion: &Suggestion,
) {
    let lines: Vec<&str> = suggestion.text.lines().collect();
    if lines.is_empty() {
        return;
    }

    let text_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let width = text_width.saturating_add(CHROME_WIDTH);
    let height = (lines.len() as u16).saturating_add(CHROME_HEIGHT);

    let area = popup::below_cell(editor_area, caret_cell, width, height);
    if area.width <= CHROME_WIDTH / 2 || area.height <= CHROME_HEIGHT / 2 {
        return;
    }

    let ghost_style = Style::default().fg(Color::Gray);
    let body: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled((*l).to_string(), ghost_style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(0x81, 0xD4, 0xFA)))
        .padding(Padding::horizontal(1));

    popup::clear_area(frame, area);
    frame.render_widget(Paragraph::new(body).block(block), area);
}
