//! Terminal event handling.
//!
//! A background thread polls crossterm and forwards events over a channel,
//! emitting a tick every 250ms when the terminal is idle. Key events are
//! translated into [`Action`]s before the app sees them.

use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Tick cadence; transitions and notification TTLs count in these.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Terminal events.
#[derive(Debug, Clone)]
pub enum Event {
    /// Periodic tick for transitions and timers
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize (columns, rows)
    Resize(u16, u16),
}

/// Reads crossterm events on a dedicated thread.
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        std::thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = TICK_RATE
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    let forwarded = match event::read() {
                        Ok(event::Event::Key(key)) => sender.send(Event::Key(key)),
                        Ok(event::Event::Mouse(mouse)) => sender.send(Event::Mouse(mouse)),
                        Ok(event::Event::Resize(w, h)) => sender.send(Event::Resize(w, h)),
                        _ => Ok(()),
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }

                if last_tick.elapsed() >= TICK_RATE {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// Next event, or `None` once the poller thread has exited.
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// App-level actions produced from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Toggle the help overlay
    Help,
    /// Close the help overlay (or quit from a top-level screen)
    Back,
    /// Jump directly to a section (0-based)
    Section(usize),
    /// Next section tab
    NextSection,
    /// Previous section tab
    PrevSection,
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Previous category or group
    Left,
    /// Next category or group
    Right,
    /// Expand the selected panel / activate
    Select,
    /// Toggle the show-more pager
    ShowMore,
    /// Copy the selected item's link
    Copy,
    /// Cycle the color theme
    CycleTheme,
    /// Cycle the icon mode
    CycleIcons,
    /// No action
    None,
}

/// Map a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::Back,
        KeyCode::Char('1') => Action::Section(0),
        KeyCode::Char('2') => Action::Section(1),
        KeyCode::Char('3') => Action::Section(2),
        KeyCode::Tab => Action::NextSection,
        KeyCode::BackTab => Action::PrevSection,
        KeyCode::Char('j') | KeyCode::Down => Action::Down,
        KeyCode::Char('k') | KeyCode::Up => Action::Up,
        KeyCode::Char('h') | KeyCode::Left => Action::Left,
        KeyCode::Char('l') | KeyCode::Right => Action::Right,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('m') => Action::ShowMore,
        KeyCode::Char('y') => Action::Copy,
        KeyCode::Char('t') => Action::CycleTheme,
        KeyCode::Char('i') => Action::CycleIcons,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_escape_is_back() {
        assert_eq!(key_to_action(key(KeyCode::Esc)), Action::Back);
    }

    #[test]
    fn test_section_jump_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('1'))), Action::Section(0));
        assert_eq!(key_to_action(key(KeyCode::Char('2'))), Action::Section(1));
        assert_eq!(key_to_action(key(KeyCode::Char('3'))), Action::Section(2));
    }

    #[test]
    fn test_tab_cycles_sections() {
        assert_eq!(key_to_action(key(KeyCode::Tab)), Action::NextSection);
        assert_eq!(key_to_action(key(KeyCode::BackTab)), Action::PrevSection);
    }

    #[test]
    fn test_vim_movement() {
        assert_eq!(key_to_action(key(KeyCode::Char('j'))), Action::Down);
        assert_eq!(key_to_action(key(KeyCode::Char('k'))), Action::Up);
        assert_eq!(key_to_action(key(KeyCode::Char('h'))), Action::Left);
        assert_eq!(key_to_action(key(KeyCode::Char('l'))), Action::Right);
    }

    #[test]
    fn test_arrow_movement() {
        assert_eq!(key_to_action(key(KeyCode::Down)), Action::Down);
        assert_eq!(key_to_action(key(KeyCode::Up)), Action::Up);
        assert_eq!(key_to_action(key(KeyCode::Left)), Action::Left);
        assert_eq!(key_to_action(key(KeyCode::Right)), Action::Right);
    }

    #[test]
    fn test_feature_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('m'))), Action::ShowMore);
        assert_eq!(key_to_action(key(KeyCode::Char('y'))), Action::Copy);
        assert_eq!(key_to_action(key(KeyCode::Char('t'))), Action::CycleTheme);
        assert_eq!(key_to_action(key(KeyCode::Char('i'))), Action::CycleIcons);
        assert_eq!(key_to_action(key(KeyCode::Char('?'))), Action::Help);
        assert_eq!(key_to_action(key(KeyCode::Enter)), Action::Select);
    }

    #[test]
    fn test_unbound_key_is_none() {
        assert_eq!(key_to_action(key(KeyCode::Char('z'))), Action::None);
    }
}
