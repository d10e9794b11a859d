//! Shared helpers for rendering screens into plain-text buffers in tests.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use folio_core::{Portfolio, Settings};

use crate::app::App;
use crate::screens;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// An app over the built-in portfolio, measured at the test width.
pub fn create_test_app() -> App {
    let mut app = App::new(Portfolio::builtin(), Settings::default(), None);
    app.relayout(TEST_WIDTH);
    app
}

/// Render the app's current frame and return it as trimmed plain text.
pub fn render_to_string(app: &App) -> String {
    render_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

pub fn render_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| {
            let area = frame.area();
            screens::render_app(app, area, frame.buffer_mut());
        })
        .expect("draw frame");
    buffer_to_string(terminal.backend().buffer())
}

/// Flatten a buffer into text, trimming trailing spaces per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        let mut row = String::new();
        for x in 0..buffer.area.width {
            row.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
