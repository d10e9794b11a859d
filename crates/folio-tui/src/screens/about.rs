//! About screen: profile card on the left, the journey timeline on the right.
//!
//! Timeline entries render their body under the panel controller's max-height
//! rule: collapsed overflowing entries are cut at the clamp with a "See more"
//! hint, expanding entries grow with the in-flight reveal, settled entries
//! render unclamped.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use folio_core::panel::Height;
use folio_core::TimelineEntry;

use crate::app::{App, UNITS_PER_ROW};
use crate::screens::Screen;
use crate::text::{render_markdown, wrap_lines, wrap_text};
use crate::theme::{IconSet, Theme};

/// Share of the screen the timeline pane takes.
const TIMELINE_PERCENT: u16 = 55;

/// Columns available for entry body text at a given terminal width.
///
/// Accounts for the pane border and the marker gutter. Measurement and
/// rendering both go through this so the controller sees the same widths the
/// screen draws with.
pub fn timeline_text_width(terminal_width: u16) -> u16 {
    (terminal_width * TIMELINE_PERCENT / 100).saturating_sub(6)
}

/// Body lines for a timeline entry: highlights, description, tech badges.
///
/// The header and organization lines are not part of the body; the clamp
/// applies to these lines only.
pub fn entry_body_lines(
    entry: &TimelineEntry,
    icons: &IconSet,
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let width = width.max(8) as usize;
    let mut lines = Vec::new();

    for highlight in &entry.highlights {
        let bullet = format!("{} ", icons.bullet());
        let indent = "  ".to_string();
        for (i, row) in wrap_text(highlight, width.saturating_sub(2))
            .into_iter()
            .enumerate()
        {
            let prefix = if i == 0 { bullet.clone() } else { indent.clone() };
            lines.push(Line::from(vec![
                Span::styled(prefix, Style::default().fg(theme.secondary)),
                Span::styled(row, Style::default().fg(theme.text)),
            ]));
        }
    }

    if !entry.description.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(wrap_lines(render_markdown(&entry.description, theme), width));
    }

    if !entry.tech.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        let mut spans = Vec::new();
        for (i, badge) in entry.tech.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(
                format!("{} {}", icons.tech_badge(&badge.label), badge.label),
                Style::default().fg(theme.subtext),
            ));
        }
        lines.extend(wrap_lines(vec![Line::from(spans)], width));
    }

    lines
}

/// Natural body height of an entry in controller units.
pub fn entry_natural_height(
    entry: &TimelineEntry,
    icons: &IconSet,
    theme: &Theme,
    width: u16,
) -> Height {
    entry_body_lines(entry, icons, theme, width).len() as Height * UNITS_PER_ROW
}

pub struct AboutScreen;

impl Screen for AboutScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - TIMELINE_PERCENT),
                Constraint::Percentage(TIMELINE_PERCENT),
            ])
            .split(area);

        render_profile(app, panes[0], buf);
        render_timeline(app, panes[1], buf);
    }
}

fn render_profile(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" Who I Am ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let profile = &app.portfolio.profile;
    let width = inner.width.saturating_sub(1) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.role.clone(),
            Style::default().fg(theme.subtext),
        )),
        Line::default(),
    ];
    lines.extend(wrap_lines(render_markdown(&profile.bio, theme), width));

    let education = &profile.education;
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(
            "{} {}",
            app.icons.entry_marker(folio_core::EntryKind::Education),
            education.institution
        ),
        Style::default()
            .fg(theme.education)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "  {}, {} ({})",
            education.degree, education.field, education.years
        ),
        Style::default().fg(theme.subtext),
    )));

    if !profile.certifications.is_empty() {
        lines.push(Line::default());
        for cert in &profile.certifications {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", app.icons.certificate()),
                    Style::default().fg(theme.award),
                ),
                Span::styled(cert.title.clone(), Style::default().fg(theme.text)),
                Span::styled(
                    format!(" — {}", cert.issuer),
                    Style::default().fg(theme.muted),
                ),
            ]));
        }
    }

    Paragraph::new(lines).render(inner, buf);
}

fn render_timeline(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" My Journey ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let text_width = timeline_text_width(app.width());
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (index, entry) in app
        .portfolio
        .timeline
        .iter()
        .enumerate()
        .skip(app.timeline_scroll)
    {
        if lines.len() >= inner.height as usize {
            break;
        }
        let selected = index == app.timeline_selected;
        render_entry(app, entry, selected, text_width, &mut lines);
        lines.push(Line::default());
    }

    lines.truncate(inner.height as usize);
    Paragraph::new(lines).render(inner, buf);
}

fn render_entry(
    app: &App,
    entry: &TimelineEntry,
    selected: bool,
    text_width: u16,
    lines: &mut Vec<Line<'static>>,
) {
    let theme = &app.theme;
    let accent = theme.entry_kind(entry.kind);

    let marker = if selected {
        app.icons.selector()
    } else {
        " "
    };
    let title_color = if selected && app.is_pulsing(&entry.id) {
        theme.primary
    } else if selected {
        accent
    } else {
        theme.text
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(theme.primary)),
        Span::styled(
            format!("{} ", app.icons.entry_marker(entry.kind)),
            Style::default().fg(accent),
        ),
        Span::styled(
            format!("{}  ", entry.year),
            Style::default().fg(theme.muted),
        ),
        Span::styled(
            entry.title.clone(),
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        ),
    ]));

    if entry.organization.is_some() || entry.location.is_some() {
        let mut parts = Vec::new();
        if let Some(org) = &entry.organization {
            parts.push(org.clone());
        }
        if let Some(location) = &entry.location {
            parts.push(format!("{} {location}", app.icons.location()));
        }
        lines.push(Line::from(Span::styled(
            format!("  {}", parts.join(" · ")),
            Style::default().fg(theme.subtext),
        )));
    }

    let body = entry_body_lines(entry, &app.icons, theme, text_width);
    let visible = match app.clamp_rows(&entry.id) {
        Some(rows) => body.len().min(rows as usize),
        None => body.len(),
    };
    lines.extend(
        body.into_iter()
            .take(visible)
            .map(|line| indent_line(line, "  ")),
    );

    if app.panels.shows_expand_hint(&entry.id) {
        lines.push(Line::from(Span::styled(
            format!("  {} See more", app.icons.collapsed()),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
    }
}

fn indent_line(line: Line<'static>, indent: &str) -> Line<'static> {
    let mut spans = vec![Span::raw(indent.to_string())];
    spans.extend(line.spans);
    Line::from(spans)
}
