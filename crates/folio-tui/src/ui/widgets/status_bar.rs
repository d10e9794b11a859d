//! Bottom status bar with key hints and a transient notification slot.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::text::visual_width;
use crate::theme::Theme;

/// A key binding hint, e.g. `("j/k", "move")`.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

pub struct StatusBar<'a> {
    hints: &'a [KeyHint],
    notification: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            notification: None,
            theme,
        }
    }

    /// Right-aligned transient message, shown in place of nothing.
    pub fn notification(mut self, message: Option<&'a str>) -> Self {
        self.notification = message;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.surface));

        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(
                hint.key,
                Style::default()
                    .fg(self.theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", hint.label),
                Style::default().fg(self.theme.subtext),
            ));
        }
        Line::from(spans).render(area, buf);

        if let Some(message) = self.notification {
            let width = visual_width(message) as u16;
            if width + 1 <= area.width {
                let x = area.x + area.width - width - 1;
                buf.set_string(
                    x,
                    area.y,
                    message,
                    Style::default()
                        .fg(self.theme.success)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn test_renders_hints() {
        let theme = Theme::mocha();
        let hints = [KeyHint::new("j/k", "move"), KeyHint::new("q", "quit")];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&hints, &theme).render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.contains("j/k move"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_notification_right_aligned() {
        let theme = Theme::mocha();
        let hints = [KeyHint::new("q", "quit")];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&hints, &theme)
            .notification(Some("Copied"))
            .render(area, &mut buf);

        let text = row_text(&buf, 40);
        assert!(text.trim_end().ends_with("Copied"));
    }

    #[test]
    fn test_wide_notification_dropped() {
        let theme = Theme::mocha();
        let hints = [KeyHint::new("q", "quit")];
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&hints, &theme)
            .notification(Some("a message far too long to fit"))
            .render(area, &mut buf);

        let text = row_text(&buf, 10);
        assert!(!text.contains("far"));
    }
}
