//! Line wrapping for plain and styled text.
//!
//! Plain wrapping goes through textwrap. Styled ratatui lines are wrapped by
//! a word-aware pass that keeps each character's span style intact across
//! break points.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Wrap plain text to the given width.
///
/// Empty input yields a single empty line so callers can still reserve a row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    if text.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Number of rows `text` occupies when wrapped to `width`.
pub fn wrapped_height(text: &str, width: usize) -> usize {
    wrap_text(text, width).len()
}

/// Wrap a batch of styled lines to the given width.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Wrap a single styled line, preserving per-character styles.
///
/// Breaks at spaces where possible; a word wider than the full width is
/// split mid-word rather than overflowing.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line];
    }

    // Flatten to styled characters so breaks can ignore span boundaries.
    let chars: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(|c| (c, span.style)))
        .collect();

    let total: usize = chars.iter().map(|(c, _)| c.width().unwrap_or(0)).sum();
    if total <= width {
        return vec![line];
    }

    let mut out = Vec::new();
    let mut row: Vec<(char, Style)> = Vec::new();
    let mut row_width = 0;
    let mut last_space: Option<usize> = None;

    for (c, style) in chars {
        let w = c.width().unwrap_or(0);
        if row_width + w > width {
            if c == ' ' {
                // The row is full and sits on a break point; the space is
                // consumed by the break.
                trim_trailing_spaces(&mut row);
                out.push(rebuild_line(&row));
                row = Vec::new();
                row_width = 0;
                last_space = None;
                continue;
            }
            if let Some(idx) = last_space {
                // Break at the last space; the remainder starts the next row.
                let mut rest: Vec<(char, Style)> = row.split_off(idx + 1);
                trim_trailing_spaces(&mut row);
                out.push(rebuild_line(&row));
                rest.push((c, style));
                row_width = rest.iter().map(|(c, _)| c.width().unwrap_or(0)).sum();
                row = rest;
            } else {
                // A single word wider than the row; cut it.
                out.push(rebuild_line(&row));
                row = vec![(c, style)];
                row_width = w;
            }
            last_space = row.iter().rposition(|(c, _)| *c == ' ');
            continue;
        }
        if c == ' ' {
            last_space = Some(row.len());
        }
        row.push((c, style));
        row_width += w;
    }
    if !row.is_empty() {
        out.push(rebuild_line(&row));
    }
    if out.is_empty() {
        out.push(Line::default());
    }
    out
}

fn trim_trailing_spaces(row: &mut Vec<(char, Style)>) {
    while row.last().is_some_and(|(c, _)| *c == ' ') {
        row.pop();
    }
}

/// Rebuild a line from styled characters, merging runs of equal style.
fn rebuild_line(chars: &[(char, Style)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_style: Option<Style> = None;

    for (c, style) in chars {
        match current_style {
            Some(s) if s == *style => current.push(*c),
            Some(s) => {
                spans.push(Span::styled(std::mem::take(&mut current), s));
                current.push(*c);
                current_style = Some(*style);
            }
            None => {
                current.push(*c);
                current_style = Some(*style);
            }
        }
    }
    if let Some(style) = current_style {
        spans.push(Span::styled(current, style));
    }
    Line::from(spans)
}
