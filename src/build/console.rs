//! Console pane contents
//!
//! Holds relayed subprocess output and pipeline notices. Compiler
//! diagnostics arrive with ANSI colors and are parsed into styled text at
//! render time.

use ansi_to_tui::IntoText;
use ratatui::text::Text;

pub struct Console {
    lines: Vec<String>,
    scroll: u16,
    /// Stick to the newest output until the user scrolls away
    follow: bool,
    /// Set during rendering; scrolling needs to know the pane height
    pub viewport_height: u16,
}

impl Console {
    pub fn new() -> Self {
        Console {
            lines: Vec::new(),
            scroll: 0,
            follow: true,
            viewport_height: 0,
        }
    }

    /// Append text, splitting embedded newlines into separate lines.
    pub fn append(&mut self, text: impl Into<String>) {
        let text = text.into();
        for line in text.split('\n') {
            self.lines.push(line.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
        self.follow = true;
    }

    pub fn lines(&self) -> &[String] {
        self.lines.as_slice()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn max_scroll(&self, height: u16) -> u16 {
        self.line_count()
            .saturating_sub(height as usize)
            .min(u16::MAX as usize) as u16
    }

    /// Scroll offset to render with, honoring follow mode.
    pub fn effective_scroll(&self, height: u16) -> u16 {
        let max = self.max_scroll(height);
        if self.follow { max } else { self.scroll.min(max) }
    }

    pub fn scroll_up(&mut self, n: u16) {
        let current = self.effective_scroll(self.viewport_height);
        self.scroll = current.saturating_sub(n);
        self.follow = false;
    }

    pub fn scroll_down(&mut self, n: u16) {
        let max = self.max_scroll(self.viewport_height);
        self.scroll = self.effective_scroll(self.viewport_height).saturating_add(n).min(max);
        self.follow = self.scroll == max;
    }

    pub fn jump_to_top(&mut self) {
        self.scroll = 0;
        self.follow = false;
    }

    pub fn jump_to_bottom(&mut self) {
        self.follow = true;
    }

    /// Styled text for rendering; invalid ANSI falls back to raw lines.
    pub fn text(&self) -> Text<'static> {
        let joined = self.lines.join("\n");
        joined.into_text().unwrap_or_else(|_| Text::raw(joined))
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod console_tests;
