//! Technologies screen: grouped grid of badges with a docs link readout.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::app::App;
use crate::screens::Screen;
use crate::text::truncate_to_width;
use crate::ui::widgets::TabBar;

/// Grid cell width in columns.
const CELL_WIDTH: u16 = 22;

pub struct TechScreen;

impl Screen for TechScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let labels = app
            .portfolio
            .tech_groups
            .iter()
            .map(|g| format!("{} ({})", g.label, g.items.len()))
            .collect();
        TabBar::new(labels, &app.theme)
            .select(app.tech_group)
            .render(rows[0], buf);

        render_grid(app, rows[1], buf);
    }
}

fn render_grid(app: &App, area: Rect, buf: &mut Buffer) {
    let theme = &app.theme;
    let Some(group) = app.portfolio.tech_groups.get(app.tech_group) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", group.label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let columns = (inner.width / CELL_WIDTH).max(1) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    for row_items in group.items.chunks(columns) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (col, item) in row_items.iter().enumerate() {
            let index = lines.len() / 2 * columns + col;
            let selected = index == app.tech_item;
            let marker = if selected { app.icons.selector() } else { " " };
            let style = if selected {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let cell = format!(
                "{marker} {} {}",
                app.icons.tech_badge(&item.name),
                item.name
            );
            let cell = truncate_to_width(&cell, CELL_WIDTH as usize - 1);
            let pad = (CELL_WIDTH as usize).saturating_sub(crate::text::visual_width(&cell));
            spans.push(Span::styled(format!("{cell}{}", " ".repeat(pad)), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if let Some(item) = app.selected_tech() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} docs ", app.icons.link()),
                Style::default().fg(theme.info),
            ),
            Span::styled(
                truncate_to_width(&item.docs, inner.width.saturating_sub(8) as usize),
                Style::default()
                    .fg(theme.info)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    lines.truncate(inner.height as usize);
    Paragraph::new(lines).render(inner, buf);
}
