//! folio-tui: Terminal user interface for the folio portfolio.
//!
//! Three sections rendered with ratatui: About (profile and journey
//! timeline), Projects (category-filtered gallery), and Technologies.
//! Input handling, tick-stepped reveals, and settings persistence live in
//! [`app`]; rendering lives in [`screens`].

use std::io;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, MouseEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use folio_core::{Portfolio, Settings};

pub mod app;
pub mod event;
pub mod reveal;
pub mod screens;
pub mod text;
pub mod theme;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

use app::App;
use event::{key_to_action, Action, Event, EventHandler};

/// Restores the terminal on drop, including on panic unwinds.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Run the TUI until the user quits.
///
/// Settings changes made inside the session (theme, icons) are saved to
/// `settings_path` as they happen.
pub async fn run_tui(
    portfolio: Portfolio,
    settings: Settings,
    settings_path: Option<PathBuf>,
) -> io::Result<()> {
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(portfolio, settings, settings_path);
    let size = terminal.size()?;
    app.relayout(size.width);

    let result = run_loop(&mut terminal, &mut app).await;
    drop(guard);
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    let mut events = EventHandler::new();

    while !app.should_quit {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::render_app(app, area, frame.buffer_mut());
        })?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_action(key_to_action(key)),
            Some(Event::Mouse(mouse)) => match mouse.kind {
                MouseEventKind::ScrollDown => app.handle_action(Action::Down),
                MouseEventKind::ScrollUp => app.handle_action(Action::Up),
                _ => {}
            },
            Some(Event::Resize(width, _)) => app.relayout(width),
            Some(Event::Tick) => app.tick(),
            None => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod render_tests {
    use crate::app::Section;
    use crate::event::Action;
    use crate::test_utils::{create_test_app, render_to_string, render_to_string_sized};

    #[test]
    fn test_about_screen_shows_profile_and_timeline() {
        let app = create_test_app();
        let text = render_to_string(&app);
        assert!(text.contains("Who I Am"));
        assert!(text.contains("My Journey"));
        assert!(text.contains(&app.portfolio.profile.name));
        assert!(text.contains("2022"));
    }

    #[test]
    fn test_overflowing_entries_show_see_more() {
        let app = create_test_app();
        let text = render_to_string(&app);
        assert!(text.contains("See more"));
    }

    #[test]
    fn test_expand_drops_one_see_more_hint() {
        let mut app = create_test_app();
        let before = render_to_string(&app).matches("See more").count();
        assert!(before > 0);

        app.handle_action(Action::Select);
        for _ in 0..5 {
            app.tick();
        }
        let after = render_to_string(&app).matches("See more").count();
        assert_eq!(after, before - 1);
    }

    #[test]
    fn test_projects_screen_shows_cards_and_tabs() {
        let mut app = create_test_app();
        app.handle_action(Action::Section(1));
        let text = render_to_string(&app);
        assert!(text.contains("Projects"));
        assert!(text.contains("All ("));
        assert!(text.contains("Wood Industries"));
        assert!(text.contains("repo"));
    }

    #[test]
    fn test_projects_screen_filtered_title() {
        let mut app = create_test_app();
        app.handle_action(Action::Section(1));
        app.handle_action(Action::Right);
        let text = render_to_string(&app);
        assert!(text.contains("Projects · Web Development"));
    }

    #[test]
    fn test_tech_screen_shows_groups_and_docs() {
        let mut app = create_test_app();
        app.handle_action(Action::Section(2));
        let text = render_to_string(&app);
        let group = &app.portfolio.tech_groups[0];
        assert!(text.contains(&group.label));
        assert!(text.contains("docs"));
    }

    #[test]
    fn test_help_overlay_lists_bindings() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        let text = render_to_string(&app);
        assert!(text.contains("cycle theme"));
        assert!(text.contains("show more / show less"));
    }

    #[test]
    fn test_narrow_terminal_renders() {
        let mut app = create_test_app();
        app.relayout(50);
        let text = render_to_string_sized(&app, 50, 24);
        assert!(text.contains("Who I Am"));
    }

    #[test]
    fn test_all_sections_render() {
        let mut app = create_test_app();
        for section in Section::ALL {
            app.section = section;
            let text = render_to_string(&app);
            assert!(text.contains(section.title()));
        }
    }
}

#[cfg(test)]
mod navigation_tests {
    use crate::app::Section;
    use crate::event::Action;
    use crate::test_utils::{create_test_app, render_to_string};

    #[test]
    fn test_tab_cycles_all_sections() {
        let mut app = create_test_app();
        app.handle_action(Action::NextSection);
        assert_eq!(app.section, Section::Projects);
        app.handle_action(Action::NextSection);
        assert_eq!(app.section, Section::Tech);
        app.handle_action(Action::NextSection);
        assert_eq!(app.section, Section::About);
    }

    #[test]
    fn test_number_keys_jump() {
        let mut app = create_test_app();
        app.handle_action(Action::Section(2));
        assert_eq!(app.section, Section::Tech);
        app.handle_action(Action::Section(0));
        assert_eq!(app.section, Section::About);
    }

    #[test]
    fn test_see_more_hint_visible_before_expand() {
        let app = create_test_app();
        let text = render_to_string(&app);
        assert!(text.contains("See more"));
    }

    #[test]
    fn test_expand_removes_hint_for_selected_entry() {
        let mut app = create_test_app();
        let id = app.portfolio.timeline[0].id.clone();
        assert!(app.panels.shows_expand_hint(&id));

        app.handle_action(Action::Select);
        assert!(app.panels.is_expanded(&id));
        assert!(!app.panels.shows_expand_hint(&id));
    }

    #[test]
    fn test_expand_is_one_way() {
        let mut app = create_test_app();
        let id = app.portfolio.timeline[0].id.clone();
        app.handle_action(Action::Select);
        for _ in 0..5 {
            app.tick();
        }
        // A second Select must not collapse it.
        app.handle_action(Action::Select);
        assert!(app.panels.is_expanded(&id));
        assert_eq!(app.clamp_rows(&id), None);
    }

    #[test]
    fn test_category_cycling_wraps() {
        let mut app = create_test_app();
        app.handle_action(Action::Section(1));
        let start = app.gallery.selected();
        for _ in 0..folio_core::Category::ALL.len() {
            app.handle_action(Action::Right);
        }
        assert_eq!(app.gallery.selected(), start);
    }

    #[test]
    fn test_category_filter_shows_counts() {
        let mut app = create_test_app();
        app.handle_action(Action::Section(1));
        let text = render_to_string(&app);
        let total = app.gallery.category_count(folio_core::Category::All);
        assert!(text.contains(&format!("All ({total})")));
    }

    #[test]
    fn test_projects_selection_survives_render() {
        let mut app = create_test_app();
        app.handle_action(Action::Section(1));
        app.handle_action(Action::Down);
        let selected = app.project_selected;
        let _ = render_to_string(&app);
        assert_eq!(app.project_selected, selected);
    }

    #[test]
    fn test_tech_group_cycle_resets_item() {
        let mut app = create_test_app();
        app.handle_action(Action::Section(2));
        app.handle_action(Action::Down);
        assert_eq!(app.tech_item, 1);
        app.handle_action(Action::Right);
        assert_eq!(app.tech_item, 0);
        assert_eq!(app.tech_group, 1);
    }

    #[test]
    fn test_help_open_close_via_escape() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        assert!(render_to_string(&app).contains("Help"));
        app.handle_action(Action::Back);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_theme_cycle_changes_render_palette() {
        let mut app = create_test_app();
        let before = app.theme.base;
        app.handle_action(Action::CycleTheme);
        assert_ne!(app.theme.base, before);
    }

    #[test]
    fn test_theme_cycle_persists_settings_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        let mut app = crate::app::App::new(
            folio_core::Portfolio::builtin(),
            folio_core::Settings::default(),
            Some(path.clone()),
        );
        app.handle_action(Action::CycleTheme);

        let saved = folio_core::Settings::load(&path).unwrap();
        assert_eq!(saved.theme, "latte");
    }

    #[test]
    fn test_notification_shown_in_status_bar() {
        let mut app = create_test_app();
        app.set_notification("Copied https://example.com");
        let text = render_to_string(&app);
        assert!(text.contains("Copied https://example.com"));
    }
}
