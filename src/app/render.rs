//! Frame rendering
//!
//! Editor pane on top, console pane below, one-line status bar, then the
//! overlays: ghost text near the caret, and the modal error popup over
//! everything.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::build::BuildPhase;
use crate::completion;
use crate::editor::view;
use crate::syntax::LineState;
use crate::widgets::popup;

use super::state::{App, Focus};

const FOCUSED_BORDER: Color = Color::Rgb(0x4F, 0xC3, 0xF7);
const IDLE_BORDER: Color = Color::DarkGray;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(5),     // Editor pane
            Constraint::Length(10), // Console pane
            Constraint::Length(1),  // Status bar
        ])
        .split(frame.area());

        self.render_editor(frame, layout[0]);
        self.render_console(frame, layout[1]);
        self.render_status(frame, layout[2]);

        if let Some(message) = self.error_popup.clone() {
            self.render_error_popup(frame, message);
        }
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Editor;
        let title = format!(
            " {}{} ",
            self.editor.display_name(),
            if self.editor.is_modified() { " [+]" } else { "" }
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(if focused { FOCUSED_BORDER } else { IDLE_BORDER }));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (caret_row, caret_col) = self.editor.caret();
        self.editor.top_line =
            view::scroll_top(self.editor.top_line, caret_row, inner.height as usize);
        let top = self.editor.top_line;
        let bottom = top + inner.height as usize;
        let h_offset = view::h_scroll(caret_col, inner.width as usize);

        // Block-comment state folds from the top of the document, so lines
        // above the viewport still influence what is visible.
        let mut state = LineState::Normal;
        let mut rows: Vec<Line> = Vec::new();
        for (i, text) in self.editor.lines().iter().enumerate() {
            if i >= bottom {
                break;
            }
            let (mut spans, exit) = self.highlighter.highlight_line(text, state);
            state = exit;
            if i < top {
                continue;
            }
            if i == caret_row && focused {
                spans = view::splice_cursor(spans, caret_col);
            }
            rows.push(Line::from(view::clip_spans(&spans, h_offset, inner.width as usize)));
        }
        frame.render_widget(Paragraph::new(rows), inner);

        // Ghost text paints last, over the buffer.
        if focused && let Some(suggestion) = self.completion.suggestion() {
            let caret_cell = (
                inner.x + caret_col.saturating_sub(h_offset) as u16,
                inner.y + (caret_row - top) as u16,
            );
            completion::render::render_ghost(frame, inner, caret_cell, suggestion);
        }
    }

    fn render_console(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Console;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Console ")
            .border_style(Style::default().fg(if focused { FOCUSED_BORDER } else { IDLE_BORDER }));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        self.console.viewport_height = inner.height;
        let scroll = self.console.effective_scroll(inner.height);
        frame.render_widget(Paragraph::new(self.console.text()).scroll((scroll, 0)), inner);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let phase = match self.build.phase() {
            BuildPhase::Idle => "idle",
            BuildPhase::Compiling => "compiling",
            BuildPhase::Running => "running",
        };
        let completing = if self.completion.has_in_flight() { "…" } else { "" };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.editor.display_name()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "model:{}{}  build:{}  ",
                self.config.completion.model, completing, phase
            )),
            Span::styled(
                "^S save  F5 run  ^K stop  ^L model  ⇧Tab pane  ^Q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_error_popup(&self, frame: &mut Frame, message: String) {
        let width = (message.len() as u16 + 6).max(30);
        let area = popup::centered(frame.area(), width, 5);
        popup::clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .border_style(Style::default().fg(Color::LightRed));
        let body = Paragraph::new(format!("{message}\n\nEsc to dismiss"))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(body, area);
    }
}
