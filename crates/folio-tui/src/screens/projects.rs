//! Projects screen: category tabs, the filtered card list, and the pager.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use folio_core::{Category, Project};

use crate::app::App;
use crate::screens::Screen;
use crate::text::{truncate_to_width, wrap_text};
use crate::ui::widgets::TabBar;

pub struct ProjectsScreen;

impl Screen for ProjectsScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        render_category_tabs(app, rows[0], buf);
        render_cards(app, rows[1], buf);
    }
}

fn render_category_tabs(app: &App, area: Rect, buf: &mut Buffer) {
    let labels = Category::ALL
        .iter()
        .map(|c| format!("{} ({})", c.label(), app.gallery.category_count(*c)))
        .collect();
    let selected = Category::ALL
        .iter()
        .position(|c| *c == app.gallery.selected())
        .unwrap_or(0);
    TabBar::new(labels, &app.theme)
        .select(selected)
        .render(area, buf);
}

fn render_cards(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = &app.theme;
    let title = format!(" Projects · {} ", app.gallery.selected().label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let width = inner.width.saturating_sub(2);
    let mut lines: Vec<Line<'static>> = Vec::new();

    let visible = app.gallery.visible();
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No projects in this category.",
            Style::default().fg(theme.muted),
        )));
    }
    for (index, project) in visible.iter().enumerate() {
        render_card(app, project, index == app.project_selected, width, &mut lines);
        lines.push(Line::default());
    }

    if app.gallery.shows_pager() {
        let label = if app.gallery.show_all() {
            "Show less".to_string()
        } else {
            format!("Show more projects ({} more)", app.gallery.hidden_count())
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label} "),
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("· m", Style::default().fg(theme.muted)),
        ]));
    }

    lines.truncate(inner.height as usize);
    Paragraph::new(lines).render(inner, buf);
}

fn render_card(
    app: &App,
    project: &Project,
    selected: bool,
    width: u16,
    lines: &mut Vec<Line<'static>>,
) {
    let theme = &app.theme;
    let marker = if selected {
        app.icons.selector()
    } else {
        " "
    };
    let title_style = if selected {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(theme.primary)),
        Span::styled(
            truncate_to_width(&project.title, width.saturating_sub(2) as usize),
            title_style,
        ),
    ]));

    // Two description rows per card keeps the first page on one screen.
    for row in wrap_text(&project.description, width.saturating_sub(2) as usize)
        .into_iter()
        .take(2)
    {
        lines.push(Line::from(Span::styled(
            format!("  {row}"),
            Style::default().fg(theme.subtext),
        )));
    }

    let mut footer: Vec<Span<'static>> = vec![Span::raw("  ")];
    if !project.tags.is_empty() {
        footer.push(Span::styled(
            truncate_to_width(&project.tags.join(" · "), width.saturating_sub(12) as usize),
            Style::default().fg(theme.muted),
        ));
    }
    if project.repo.is_some() {
        footer.push(Span::styled(
            format!("  {} repo", app.icons.link()),
            Style::default().fg(theme.info),
        ));
    }
    if project.live.is_some() {
        footer.push(Span::styled(
            format!("  {} live", app.icons.link()),
            Style::default().fg(theme.success),
        ));
    }
    if footer.len() > 1 {
        lines.push(Line::from(footer));
    }
}
