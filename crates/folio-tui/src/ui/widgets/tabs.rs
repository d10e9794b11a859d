//! Tab bar widget.
//!
//! Renders a single row of labels, one highlighted. Section tabs carry
//! `[n]` number hints; category tabs carry match-count badges instead.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::Theme;

pub struct TabBar<'a> {
    labels: Vec<String>,
    selected: usize,
    numbered: bool,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(labels: Vec<String>, theme: &'a Theme) -> Self {
        Self {
            labels,
            selected: 0,
            numbered: false,
            theme,
        }
    }

    pub fn select(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Prefix each label with its `[n]` jump key.
    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(self.theme.border)));
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.subtext)
            };
            if self.numbered {
                spans.push(Span::styled(
                    format!("[{}] ", i + 1),
                    Style::default().fg(self.theme.muted),
                ));
            }
            spans.push(Span::styled(label.clone(), style));
        }
        Line::from(spans).render(area, buf);
    }
}
