//! Application state and action handling.
//!
//! `App` owns the portfolio content, the panel and gallery controllers from
//! folio-core, per-screen selections, in-flight reveals, and the persisted
//! settings. All mutation goes through [`App::handle_action`] and
//! [`App::tick`]; rendering reads the state without changing it.

use std::collections::HashMap;
use std::path::PathBuf;

use folio_core::panel::{Height, MaxHeight, TransitionProperty};
use folio_core::{Gallery, PanelController, Portfolio, Project, Settings, TimelineEntry};

use crate::event::Action;
use crate::reveal::Reveal;
use crate::screens;
use crate::theme::{IconMode, IconSet, Theme, ThemeKind};

/// Height units per terminal row. The controller measures content in the
/// site's pixel-like units; one row of text is worth 16 of them.
pub const UNITS_PER_ROW: Height = 16;

/// Convert controller height units to terminal rows, rounding up.
pub fn units_to_rows(units: Height) -> u16 {
    units.div_ceil(UNITS_PER_ROW) as u16
}

/// Ticks a notification stays on screen (3 seconds).
const NOTIFICATION_TTL: u64 = 12;

/// Top-level screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Projects,
    Tech,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Projects, Section::Tech];

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Tech => "Technologies",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Projects => 1,
            Section::Tech => 2,
        }
    }

    pub fn next(self) -> Self {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

/// Application state.
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub section: Section,

    pub portfolio: Portfolio,
    pub panels: PanelController,
    pub gallery: Gallery,

    pub settings: Settings,
    settings_path: Option<PathBuf>,
    pub theme: Theme,
    pub theme_kind: ThemeKind,
    pub icons: IconSet,

    /// About: selected timeline entry and first rendered entry.
    pub timeline_selected: usize,
    pub timeline_scroll: usize,
    /// Projects: selection within the visible list.
    pub project_selected: usize,
    /// Tech: selected group and item within it.
    pub tech_group: usize,
    pub tech_item: usize,

    pub tick: u64,
    pub notification: Option<String>,
    notification_expires: u64,

    reveals: Vec<Reveal>,
    width: u16,
    natural_heights: HashMap<String, Height>,
}

impl App {
    pub fn new(portfolio: Portfolio, settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let theme_kind = ThemeKind::parse(&settings.theme);
        let icons = IconSet::new(IconMode::parse(&settings.icons));
        let gallery = Gallery::new(portfolio.projects.clone());

        let mut app = Self {
            should_quit: false,
            show_help: false,
            section: Section::About,
            portfolio,
            panels: PanelController::new(),
            gallery,
            settings,
            settings_path,
            theme: theme_kind.theme(),
            theme_kind,
            icons,
            timeline_selected: 0,
            timeline_scroll: 0,
            project_selected: 0,
            tech_group: 0,
            tech_item: 0,
            tick: 0,
            notification: None,
            notification_expires: 0,
            reveals: Vec::new(),
            width: 80,
            natural_heights: HashMap::new(),
        };
        app.relayout(80);
        app
    }

    /// Re-measure every timeline entry for a new terminal width.
    ///
    /// Expanded entries stay expanded; only the overflow flags are refreshed,
    /// so a resize can grow or shrink the set of "See more" hints.
    pub fn relayout(&mut self, width: u16) {
        self.width = width;
        let text_width = screens::about::timeline_text_width(width);
        for entry in &self.portfolio.timeline {
            let height =
                screens::about::entry_natural_height(entry, &self.icons, &self.theme, text_width);
            self.natural_heights.insert(entry.id.clone(), height);
            self.panels.measure_overflow(&entry.id, height);
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Advance timers: reveals, notification TTL.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if self.notification.is_some() && self.tick >= self.notification_expires {
            self.notification = None;
        }

        for reveal in &mut self.reveals {
            reveal.tick();
        }
        let settled: Vec<(String, TransitionProperty)> = self
            .reveals
            .iter()
            .filter(|r| r.finished())
            .map(|r| (r.entry_id().to_string(), r.property()))
            .collect();
        self.reveals.retain(|r| !r.finished());
        for (id, property) in settled {
            self.panels.transition_settled(&id, property);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::Help | Action::Back | Action::Select => self.show_help = false,
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit | Action::Back => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Section(index) => {
                if let Some(section) = Section::ALL.get(index) {
                    self.section = *section;
                }
            }
            Action::NextSection => self.section = self.section.next(),
            Action::PrevSection => self.section = self.section.prev(),
            Action::CycleTheme => self.cycle_theme(),
            Action::CycleIcons => self.cycle_icons(),
            Action::None => {}
            _ => match self.section {
                Section::About => self.handle_about(action),
                Section::Projects => self.handle_projects(action),
                Section::Tech => self.handle_tech(action),
            },
        }
    }

    fn handle_about(&mut self, action: Action) {
        match action {
            Action::Down => self.select_timeline(self.timeline_selected + 1),
            Action::Up => self.select_timeline(self.timeline_selected.saturating_sub(1)),
            Action::Select => self.expand_selected(),
            Action::Copy => {
                if let Some(url) = self
                    .selected_entry()
                    .and_then(|e| e.organization_url.clone())
                {
                    self.copy_to_clipboard(&url);
                } else {
                    self.set_notification("No link for this entry");
                }
            }
            _ => {}
        }
    }

    fn handle_projects(&mut self, action: Action) {
        match action {
            Action::Right => {
                self.gallery.select(self.gallery.selected().next());
                self.project_selected = 0;
            }
            Action::Left => {
                self.gallery.select(self.gallery.selected().prev());
                self.project_selected = 0;
            }
            Action::Down => {
                let count = self.gallery.visible().len();
                if count > 0 {
                    self.project_selected = (self.project_selected + 1).min(count - 1);
                }
            }
            Action::Up => {
                self.project_selected = self.project_selected.saturating_sub(1);
            }
            Action::ShowMore => {
                if self.gallery.shows_pager() {
                    self.gallery.toggle_show_all();
                    let count = self.gallery.visible().len();
                    self.project_selected = self.project_selected.min(count.saturating_sub(1));
                }
            }
            Action::Copy | Action::Select => {
                let link = self
                    .selected_project()
                    .and_then(|p| p.repo.as_ref().or(p.live.as_ref()))
                    .cloned();
                match link {
                    Some(url) => self.copy_to_clipboard(&url),
                    None => self.set_notification("No link for this project"),
                }
            }
            _ => {}
        }
    }

    fn handle_tech(&mut self, action: Action) {
        let groups = &self.portfolio.tech_groups;
        if groups.is_empty() {
            return;
        }
        match action {
            Action::Right => {
                self.tech_group = (self.tech_group + 1) % groups.len();
                self.tech_item = 0;
            }
            Action::Left => {
                self.tech_group = (self.tech_group + groups.len() - 1) % groups.len();
                self.tech_item = 0;
            }
            Action::Down => {
                let count = groups[self.tech_group].items.len();
                if count > 0 {
                    self.tech_item = (self.tech_item + 1).min(count - 1);
                }
            }
            Action::Up => self.tech_item = self.tech_item.saturating_sub(1),
            Action::Copy | Action::Select => {
                let docs = self.selected_tech().map(|item| item.docs.clone());
                match docs {
                    Some(url) => self.copy_to_clipboard(&url),
                    None => self.set_notification("Nothing to copy"),
                }
            }
            _ => {}
        }
    }

    fn select_timeline(&mut self, index: usize) {
        let count = self.portfolio.timeline.len();
        if count == 0 {
            return;
        }
        let index = index.min(count - 1);
        if index == self.timeline_selected {
            return;
        }
        self.timeline_selected = index;
        if self.timeline_selected < self.timeline_scroll {
            self.timeline_scroll = self.timeline_selected;
        } else if self.timeline_selected > self.timeline_scroll + 1 {
            self.timeline_scroll = self.timeline_selected - 1;
        }

        // Pulse the newly selected entry's accent. The settled report for a
        // pulse is a no-op in the controller; only max-height settles matter.
        let id = self.portfolio.timeline[index].id.clone();
        self.reveals
            .retain(|r| r.property() != TransitionProperty::Accent);
        self.reveals.push(Reveal::pulse(id));
    }

    /// Expand the selected timeline entry, if it is showing "See more".
    fn expand_selected(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let id = entry.id.clone();
        if !self.panels.shows_expand_hint(&id) {
            return;
        }
        let natural = self
            .natural_heights
            .get(&id)
            .copied()
            .unwrap_or(folio_core::COLLAPSED_MAX_HEIGHT);
        self.panels.expand(&id, natural);
        self.reveals.push(Reveal::clamp(
            &id,
            folio_core::COLLAPSED_MAX_HEIGHT,
            natural,
        ));
    }

    /// Rows the selected entry's body may occupy right now, or `None` once
    /// the expand transition has settled and the clamp is gone.
    pub fn clamp_rows(&self, id: &str) -> Option<u16> {
        if let Some(reveal) = self
            .reveals
            .iter()
            .find(|r| r.entry_id() == id && r.property() == TransitionProperty::MaxHeight)
        {
            return Some(units_to_rows(reveal.current()));
        }
        match self.panels.max_height(id) {
            MaxHeight::Clamped(units) => Some(units_to_rows(units)),
            MaxHeight::Unbounded => None,
        }
    }

    /// Whether the selection pulse is active on an entry.
    pub fn is_pulsing(&self, id: &str) -> bool {
        self.reveals
            .iter()
            .any(|r| r.entry_id() == id && r.property() == TransitionProperty::Accent)
    }

    pub fn selected_entry(&self) -> Option<&TimelineEntry> {
        self.portfolio.timeline.get(self.timeline_selected)
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.gallery.visible().get(self.project_selected).copied()
    }

    pub fn selected_tech(&self) -> Option<&folio_core::TechItem> {
        self.portfolio
            .tech_groups
            .get(self.tech_group)
            .and_then(|g| g.items.get(self.tech_item))
    }

    fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.settings.theme = self.theme_kind.name().to_string();
        self.persist_settings();
        // Style changes never affect line counts, but keep measurements in
        // sync with the theme used to build them.
        self.relayout(self.width);
        self.set_notification(format!("Theme: {}", self.theme_kind.name()));
    }

    fn cycle_icons(&mut self) {
        self.icons = IconSet::new(self.icons.mode().next());
        self.settings.icons = self.icons.mode().name().to_string();
        self.persist_settings();
        // Icon widths differ between modes, so heights can change.
        self.relayout(self.width);
        self.set_notification(format!("Icons: {}", self.icons.mode().name()));
    }

    fn persist_settings(&mut self) {
        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save(path) {
                tracing::warn!("failed to save settings to {}: {e}", path.display());
            }
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        let result =
            arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()));
        match result {
            Ok(()) => self.set_notification(format!("Copied {text}")),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.set_notification("Copy failed");
            }
        }
    }

    pub fn set_notification(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.notification_expires = self.tick + NOTIFICATION_TTL;
    }
}
