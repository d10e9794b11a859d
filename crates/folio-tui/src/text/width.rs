//! Display-width helpers built on unicode-width.
//!
//! Terminal cells, not chars: emoji and CJK occupy two columns, combining
//! marks occupy zero.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of a string in terminal columns.
pub fn visual_width(s: &str) -> usize {
    s.width()
}

/// Truncate a string to at most `max` columns, appending `…` when cut.
///
/// The ellipsis itself takes one column, so the kept prefix is at most
/// `max - 1` columns wide.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(visual_width("hello"), 5);
        assert_eq!(visual_width(""), 0);
    }

    #[test]
    fn test_wide_char_width() {
        assert_eq!(visual_width("日本"), 4);
        assert_eq!(visual_width("🦀"), 2);
    }

    #[test]
    fn test_truncate_noop_when_fits() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        // Each kanji is 2 columns; budget of 4 leaves room for one + ellipsis
        let out = truncate_to_width("日本語", 4);
        assert_eq!(out, "日…");
        assert!(visual_width(&out) <= 4);
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
