//! Icon and glyph definitions.
//!
//! Three modes: Nerd Font glyphs for patched fonts, plain Unicode symbols
//! (default), and pure ASCII for minimal terminals. Technology names map to
//! glyphs by lookup; unknown names fall back to a bracketed first letter.

use folio_core::EntryKind;

/// Icon rendering mode, cycled with the `i` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font glyphs (requires a patched font)
    Nerd,
    /// Plain Unicode symbols
    #[default]
    Unicode,
    /// Pure ASCII fallback
    Ascii,
}

impl IconMode {
    /// Settings-file name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            IconMode::Nerd => "nerd",
            IconMode::Unicode => "unicode",
            IconMode::Ascii => "ascii",
        }
    }

    /// Parse a settings-file name; unknown names fall back to the default.
    pub fn parse(name: &str) -> Self {
        match name {
            "nerd" => IconMode::Nerd,
            "ascii" => IconMode::Ascii,
            _ => IconMode::Unicode,
        }
    }

    /// Next mode in cycle order.
    pub fn next(self) -> Self {
        match self {
            IconMode::Nerd => IconMode::Unicode,
            IconMode::Unicode => IconMode::Ascii,
            IconMode::Ascii => IconMode::Nerd,
        }
    }
}

/// Icon set for the active mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Marker glyph for a timeline entry kind.
    pub fn entry_marker(&self, kind: EntryKind) -> &'static str {
        match (self.mode, kind) {
            (IconMode::Nerd, EntryKind::Education) => "\u{f19d}",  // graduation cap
            (IconMode::Nerd, EntryKind::Experience) => "\u{f0b1}", // briefcase
            (IconMode::Nerd, EntryKind::Award) => "\u{f091}",      // trophy
            (IconMode::Unicode, EntryKind::Education) => "🎓",
            (IconMode::Unicode, EntryKind::Experience) => "💼",
            (IconMode::Unicode, EntryKind::Award) => "🏆",
            (IconMode::Ascii, EntryKind::Education) => "E",
            (IconMode::Ascii, EntryKind::Experience) => "W",
            (IconMode::Ascii, EntryKind::Award) => "A",
        }
    }

    /// Indicator for an expanded panel.
    pub fn expanded(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "▾",
            IconMode::Ascii => "v",
        }
    }

    /// Indicator for a collapsed, overflowing panel.
    pub fn collapsed(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "▸",
            IconMode::Ascii => ">",
        }
    }

    /// Selection marker for lists.
    pub fn selector(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "▸",
            IconMode::Ascii => ">",
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "•",
            IconMode::Ascii => "*",
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0c1}",
            IconMode::Unicode => "🔗",
            IconMode::Ascii => "@",
        }
    }

    pub fn certificate(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0a3}",
            IconMode::Unicode => "📜",
            IconMode::Ascii => "#",
        }
    }

    pub fn location(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f041}",
            IconMode::Unicode => "📍",
            IconMode::Ascii => "~",
        }
    }

    /// Glyph for a known technology name, if the mode has one.
    ///
    /// Lookup is case-insensitive on the display name.
    pub fn tech_glyph(&self, name: &str) -> Option<&'static str> {
        if self.mode == IconMode::Ascii {
            return None;
        }
        let nerd = self.mode == IconMode::Nerd;
        let glyph = match name.to_ascii_lowercase().as_str() {
            "rust" => ("\u{e7a8}", "🦀"),
            "python" => ("\u{e73c}", "🐍"),
            "react" => ("\u{e7ba}", "⚛"),
            "node.js" | "nodejs" => ("\u{e718}", "⬢"),
            "docker" => ("\u{f308}", "🐳"),
            "git" => ("\u{f1d3}", "⎇"),
            "linux" => ("\u{f17c}", "🐧"),
            "postgresql" | "postgres" => ("\u{e76e}", "🐘"),
            "mongodb" => ("\u{e7a4}", "🍃"),
            "firebase" => ("\u{f269}", "🔥"),
            "tensorflow" => ("\u{e73d}", "🧠"),
            _ => return None,
        };
        Some(if nerd { glyph.0 } else { glyph.1 })
    }

    /// Badge text for a technology: its glyph, or a bracketed first letter
    /// when no glyph is known. Mirrors the site's broken-logo fallback.
    pub fn tech_badge(&self, name: &str) -> String {
        if let Some(glyph) = self.tech_glyph(name) {
            return glyph.to_string();
        }
        let initial = name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        format!("[{initial}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_roundtrip() {
        for mode in [IconMode::Nerd, IconMode::Unicode, IconMode::Ascii] {
            assert_eq!(IconMode::parse(mode.name()), mode);
        }
    }

    #[test]
    fn test_mode_parse_unknown_defaults_to_unicode() {
        assert_eq!(IconMode::parse("emoji"), IconMode::Unicode);
    }

    #[test]
    fn test_mode_cycle_covers_all() {
        let start = IconMode::Nerd;
        assert_eq!(start.next(), IconMode::Unicode);
        assert_eq!(start.next().next(), IconMode::Ascii);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_ascii_markers_are_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for kind in [EntryKind::Education, EntryKind::Experience, EntryKind::Award] {
            assert!(icons.entry_marker(kind).is_ascii());
        }
        assert!(icons.collapsed().is_ascii());
        assert!(icons.bullet().is_ascii());
    }

    #[test]
    fn test_tech_glyph_known_name() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.tech_glyph("Rust"), Some("🦀"));
        assert_eq!(icons.tech_glyph("rust"), Some("🦀"));
    }

    #[test]
    fn test_tech_badge_falls_back_to_initial() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.tech_badge("Zustand"), "[Z]");
        assert_eq!(icons.tech_badge("three.js"), "[T]");
    }

    #[test]
    fn test_tech_badge_unknown_empty_name() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.tech_badge("---"), "[?]");
    }

    #[test]
    fn test_ascii_mode_never_uses_glyphs() {
        let icons = IconSet::new(IconMode::Ascii);
        assert_eq!(icons.tech_glyph("Rust"), None);
        assert_eq!(icons.tech_badge("Rust"), "[R]");
    }
}
