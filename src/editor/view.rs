//! Span surgery for the editor viewport
//!
//! The editor pane renders highlighted lines itself instead of the textarea
//! widget, so it needs to clip styled spans to the horizontal viewport and
//! splice a block cursor into them without disturbing the styling.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// First visible row after keeping the caret inside a viewport of `height`
/// rows.
pub fn scroll_top(top: usize, caret_row: usize, height: usize) -> usize {
    if height == 0 {
        return top;
    }
    if caret_row < top {
        caret_row
    } else if caret_row >= top + height {
        caret_row + 1 - height
    } else {
        top
    }
}

/// Horizontal scroll offset keeping the caret column in view.
pub fn h_scroll(caret_col: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    caret_col.saturating_sub(width - 1)
}

/// Clip styled spans to the columns `[offset, offset + width)`.
pub fn clip_spans(spans: &[Span<'static>], offset: usize, width: usize) -> Vec<Span<'static>> {
    let mut clipped = Vec::new();
    let mut col = 0;
    let end = offset + width;

    for span in spans {
        let len = span.content.chars().count();
        let span_end = col + len;

        if span_end <= offset {
            col = span_end;
            continue;
        }
        if col >= end {
            break;
        }

        let from = offset.saturating_sub(col);
        let to = (end - col).min(len);
        if from < to {
            let visible: String = span.content.chars().skip(from).take(to - from).collect();
            clipped.push(Span::styled(visible, span.style));
        }

        col = span_end;
    }

    clipped
}

/// Replace the character at `cursor_col` with a reversed-style span. A caret
/// past the end of the line becomes a reversed space appended to the spans.
pub fn splice_cursor(spans: Vec<Span<'static>>, cursor_col: usize) -> Vec<Span<'static>> {
    let mut result = Vec::new();
    let mut col = 0;

    for span in &spans {
        let chars: Vec<char> = span.content.chars().collect();
        let span_end = col + chars.len();

        if cursor_col < col || cursor_col >= span_end {
            result.push(span.clone());
            col = span_end;
            continue;
        }

        let at = cursor_col - col;
        if at > 0 {
            let before: String = chars[..at].iter().collect();
            result.push(Span::styled(before, span.style));
        }
        result.push(Span::styled(
            chars[at].to_string(),
            span.style.add_modifier(Modifier::REVERSED),
        ));
        if at + 1 < chars.len() {
            let after: String = chars[at + 1..].iter().collect();
            result.push(Span::styled(after, span.style));
        }

        col = span_end;
    }

    let total: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if cursor_col >= total {
        result.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));
    }

    result
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
