//! Shared helpers for TUI tests.

use std::path::PathBuf;

use folio_core::{Document, ViewerConfig};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::app::App;

/// Standard terminal width for tests.
pub const TEST_WIDTH: u16 = 80;
/// Standard terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal at the standard size.
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT)
}

/// Create a test terminal at a specific size.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("failed to create test terminal")
}

/// Create an app over the sample itinerary with default config.
pub fn create_test_app() -> App {
    App::new(
        Document::sample(),
        PathBuf::from("itinerary.json"),
        ViewerConfig::default(),
    )
}

/// Render the app at the standard test size and return the buffer as text.
pub fn render_to_string(app: &App) -> String {
    let mut terminal = create_test_terminal();
    terminal
        .draw(|frame| crate::view::render(app, frame))
        .expect("failed to render");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string, trimming trailing whitespace per line.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut lines = Vec::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
