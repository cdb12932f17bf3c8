//! C++ syntax highlighting
//!
//! An ordered table of regex rules is applied per line; every rule scans the
//! whole line and styles each of its matches, and later rules overwrite
//! earlier assignments on overlapping ranges. The rule order is semantic:
//! swapping two rules changes what overlapping matches look like (a numeric
//! literal inside a string renders as string because the string rule runs
//! last).
//!
//! Block comments span lines through an explicit [`LineState`] handed from
//! one line to the next, so any line can be highlighted given the state its
//! predecessor exited with.

mod rules;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use rules::Rule;

/// Cross-line highlighter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    #[default]
    Normal,
    InBlockComment,
}

/// Token classification produced by the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Plain,
    Keyword,
    Type,
    Function,
    Number,
    Operator,
    Preprocessor,
    Comment,
    Str,
}

impl TokenClass {
    /// Style for a token class (the beach palette)
    pub fn style(self) -> Style {
        match self {
            TokenClass::Plain => Style::default(),
            // Ocean blue
            TokenClass::Keyword => Style::default()
                .fg(Color::Rgb(0x64, 0xB5, 0xF6))
                .add_modifier(Modifier::BOLD),
            // Moonlit water
            TokenClass::Type => Style::default()
                .fg(Color::Rgb(0x81, 0xD4, 0xFA))
                .add_modifier(Modifier::BOLD),
            // Seafoam
            TokenClass::Function => Style::default().fg(Color::Rgb(0x4D, 0xB6, 0xAC)),
            // Sandy gold
            TokenClass::Number => Style::default().fg(Color::Rgb(0xFF, 0xD5, 0x4F)),
            // Coral
            TokenClass::Operator => Style::default().fg(Color::Rgb(0xFF, 0x8A, 0x65)),
            // Shell pink
            TokenClass::Preprocessor => Style::default().fg(Color::Rgb(0xF4, 0x8F, 0xB1)),
            // Soft sand
            TokenClass::Comment => Style::default().fg(Color::Rgb(0xD7, 0xCC, 0xC8)),
            // Pearl white
            TokenClass::Str => Style::default().fg(Color::Rgb(0xE0, 0xE0, 0xE0)),
        }
    }
}

pub struct Highlighter {
    rules: Vec<Rule>,
}

impl Highlighter {
    pub fn new() -> Self {
        Highlighter {
            rules: rules::table(),
        }
    }

    /// Highlight one line, producing styled spans and the state the next
    /// line starts in.
    pub fn highlight_line(&self, text: &str, entering: LineState) -> (Vec<Span<'static>>, LineState) {
        let (classes, exit) = self.classify(text, entering);

        // Coalesce runs of equal classes, walking char boundaries so
        // multi-byte characters are never split.
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_class = TokenClass::Plain;
        for (idx, ch) in text.char_indices() {
            let class = classes[idx];
            if class != run_class && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_class.style()));
            }
            run_class = class;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_class.style()));
        }

        (spans, exit)
    }

    /// Per-byte token classification for one line.
    ///
    /// Rules are applied in table order, then block-comment spans overwrite
    /// whatever the rules assigned, mirroring the overwrite semantics of the
    /// styled ranges.
    pub(crate) fn classify(&self, text: &str, entering: LineState) -> (Vec<TokenClass>, LineState) {
        let mut classes = vec![TokenClass::Plain; text.len()];

        for rule in &self.rules {
            for caps in rule.pattern.captures_iter(text) {
                // A rule either styles its whole match or a single capture
                // group (call sites style the identifier, not the paren).
                let m = match rule.group {
                    0 => caps.get(0),
                    g => caps.get(g),
                };
                if let Some(m) = m {
                    classes[m.range()].fill(rule.class);
                }
            }
        }

        let mut exit = LineState::Normal;
        let mut start_index = match entering {
            LineState::InBlockComment => Some(0),
            LineState::Normal => text.find("/*"),
        };

        while let Some(start) = start_index {
            match text[start..].find("*/") {
                None => {
                    classes[start..].fill(TokenClass::Comment);
                    exit = LineState::InBlockComment;
                    start_index = None;
                }
                Some(rel) => {
                    let end = start + rel + 2;
                    classes[start..end].fill(TokenClass::Comment);
                    start_index = text[end..].find("/*").map(|i| end + i);
                }
            }
        }

        (classes, exit)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
