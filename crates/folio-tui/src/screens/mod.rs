//! Screen rendering.
//!
//! Each section implements [`Screen`] and draws into the content area; the
//! chrome (tab bar, status bar, help overlay) is shared and drawn here.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};

use crate::app::{App, Section};
use crate::ui::layout::{centered_fixed, main_layout};
use crate::ui::widgets::{KeyHint, StatusBar, TabBar};

pub mod about;
pub mod projects;
pub mod tech;

pub use about::AboutScreen;
pub use projects::ProjectsScreen;
pub use tech::TechScreen;

/// A renderable screen. Screens read app state; they never mutate it.
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Draw the whole frame: chrome, the active screen, and overlays.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().bg(app.theme.base).fg(app.theme.text));

    let (tabs_area, content, status_area) = main_layout(area);

    let labels = Section::ALL.iter().map(|s| s.title().to_string()).collect();
    TabBar::new(labels, &app.theme)
        .numbered()
        .select(app.section.index())
        .render(tabs_area, buf);

    match app.section {
        Section::About => AboutScreen.render(app, content, buf),
        Section::Projects => ProjectsScreen.render(app, content, buf),
        Section::Tech => TechScreen.render(app, content, buf),
    }

    StatusBar::new(section_hints(app.section), &app.theme)
        .notification(app.notification.as_deref())
        .render(status_area, buf);

    if app.show_help {
        render_help_overlay(app, area, buf);
    }
}

fn section_hints(section: Section) -> &'static [KeyHint] {
    match section {
        Section::About => const {
            &[
                KeyHint::new("j/k", "entry"),
                KeyHint::new("enter", "see more"),
                KeyHint::new("tab", "section"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ]
        },
        Section::Projects => const {
            &[
                KeyHint::new("h/l", "category"),
                KeyHint::new("j/k", "project"),
                KeyHint::new("m", "more"),
                KeyHint::new("y", "copy link"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ]
        },
        Section::Tech => const {
            &[
                KeyHint::new("h/l", "group"),
                KeyHint::new("j/k", "item"),
                KeyHint::new("y", "copy docs"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ]
        },
    }
}

fn render_help_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = &app.theme;
    let popup = centered_fixed(44, 18, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(popup);
    block.render(popup, buf);

    let key = Style::default()
        .fg(theme.secondary)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme.text);
    let row = |k: &'static str, l: &'static str| {
        Line::from(vec![
            Span::styled(format!(" {k:<10}"), key),
            Span::styled(l, label),
        ])
    };

    let lines = vec![
        row("1/2/3", "jump to section"),
        row("tab", "next section"),
        row("j/k ↑/↓", "move selection"),
        row("h/l ←/→", "cycle category / group"),
        row("enter", "expand entry / copy link"),
        row("m", "show more / show less"),
        row("y", "copy link"),
        row("t", "cycle theme"),
        row("i", "cycle icons"),
        row("?", "toggle help"),
        row("esc", "close help"),
        row("q", "quit"),
    ];
    Paragraph::new(lines).render(inner, buf);
}
