//! Markdown rendering to styled terminal lines.
//!
//! Covers the subset the bio and entry descriptions use: paragraphs,
//! headings, bold, italics, inline code, links, and bullet lists. Anything
//! else degrades to plain text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::text::styles::MarkdownStyles;
use crate::theme::Theme;

/// Render markdown into unwrapped styled lines.
///
/// Callers wrap the result to their pane width with
/// [`crate::text::wrap_lines`].
pub fn render_markdown(source: &str, theme: &Theme) -> Vec<Line<'static>> {
    MarkdownRenderer::new(theme).render(source)
}

struct MarkdownRenderer {
    styles: MarkdownStyles,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    // Innermost style wins; stack tracks nesting like **bold with *italic***.
    style_stack: Vec<Style>,
    list_depth: usize,
}

impl MarkdownRenderer {
    fn new(theme: &Theme) -> Self {
        let styles = MarkdownStyles::from_theme(theme);
        Self {
            current: Vec::new(),
            lines: Vec::new(),
            style_stack: vec![styles.text],
            list_depth: 0,
            styles,
        }
    }

    fn render(mut self, source: &str) -> Vec<Line<'static>> {
        let parser = Parser::new_ext(source, Options::empty());
        for event in parser {
            self.event(event);
        }
        self.flush_line();
        // Drop a trailing blank paragraph separator.
        while self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }

    fn event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => {
                let style = self.active_style();
                self.current.push(Span::styled(text.into_string(), style));
            }
            Event::Code(code) => {
                self.current
                    .push(Span::styled(code.into_string(), self.styles.code));
            }
            Event::SoftBreak => {
                let style = self.active_style();
                self.current.push(Span::styled(" ", style));
            }
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "───",
                    Style::default().fg(self.styles.list_marker.fg.unwrap_or_default()),
                )));
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Paragraph => {}
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.style_stack.push(match level {
                    HeadingLevel::H1 => self.styles.h1,
                    HeadingLevel::H2 => self.styles.h2,
                    _ => self.styles.h3,
                });
            }
            Tag::Emphasis => self.style_stack.push(self.styles.emphasis),
            Tag::Strong => self.style_stack.push(self.styles.strong),
            Tag::Link { .. } => self.style_stack.push(self.styles.link),
            Tag::List(_) => self.list_depth += 1,
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.current
                    .push(Span::styled(format!("{indent}• "), self.styles.list_marker));
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                self.lines.push(Line::default());
            }
            TagEnd::Heading(_) => {
                self.style_stack.pop();
                self.flush_line();
                self.lines.push(Line::default());
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link => {
                self.style_stack.pop();
            }
            TagEnd::List(_) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.flush_line();
                    self.lines.push(Line::default());
                }
            }
            TagEnd::Item => self.flush_line(),
            _ => {}
        }
    }

    fn active_style(&self) -> Style {
        self.style_stack
            .last()
            .copied()
            .unwrap_or(self.styles.text)
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    fn render(source: &str) -> Vec<Line<'static>> {
        render_markdown(source, &Theme::mocha())
    }

    fn plain(lines: &[Line<'static>]) -> Vec<String> {
        lines.iter().map(Line::to_string).collect()
    }

    #[test]
    fn test_plain_paragraph() {
        let lines = render("just some text");
        assert_eq!(plain(&lines), vec!["just some text"]);
    }

    #[test]
    fn test_bold_styled() {
        let lines = render("a **bold** word");
        let bold: Vec<_> = lines[0]
            .spans
            .iter()
            .filter(|s| s.style.add_modifier.contains(Modifier::BOLD))
            .collect();
        assert_eq!(bold.len(), 1);
        assert_eq!(bold[0].content, "bold");
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        let lines = render("first paragraph\n\nsecond paragraph");
        let texts = plain(&lines);
        assert_eq!(texts, vec!["first paragraph", "", "second paragraph"]);
    }

    #[test]
    fn test_soft_break_joins_with_space() {
        let lines = render("one\ntwo");
        assert_eq!(plain(&lines), vec!["one two"]);
    }

    #[test]
    fn test_heading_styled() {
        let lines = render("# Title");
        assert_eq!(lines[0].to_string(), "Title");
        assert!(lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_bullet_list() {
        let lines = render("- one\n- two");
        let texts = plain(&lines);
        assert!(texts[0].starts_with("• "));
        assert!(texts.iter().any(|l| l.contains("two")));
    }

    #[test]
    fn test_inline_code() {
        let lines = render("run `cargo` here");
        assert!(lines[0].spans.iter().any(|s| s.content == "cargo"));
    }

    #[test]
    fn test_empty_input() {
        assert!(render("").is_empty());
    }
}
