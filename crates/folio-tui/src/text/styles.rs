//! Styles for rendered markdown, derived from the active theme.

use ratatui::style::{Modifier, Style};

use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct MarkdownStyles {
    pub h1: Style,
    pub h2: Style,
    pub h3: Style,
    pub text: Style,
    pub emphasis: Style,
    pub strong: Style,
    pub code: Style,
    pub link: Style,
    pub list_marker: Style,
}

impl MarkdownStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            h1: Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            h2: Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
            h3: Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
            text: Style::default().fg(theme.text),
            emphasis: Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::ITALIC),
            strong: Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(theme.warning).bg(theme.surface),
            link: Style::default()
                .fg(theme.info)
                .add_modifier(Modifier::UNDERLINED),
            list_marker: Style::default().fg(theme.secondary),
        }
    }
}
