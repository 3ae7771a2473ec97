//! folio-tui: Terminal UI for tabbed itinerary documents
//!
//! This crate provides the TUI layer for folio, including:
//! - The tabbed day view with its animated timeline
//! - Shared widgets (tab bar, panel content, footer hints)
//! - Mouse support: tab clicks, wheel scrolling, and horizontal swipes

mod app;
mod event;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod view;
mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use folio_core;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{Document, ViewerConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::path::Path;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI over the document at `path`.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(path: &Path, config: ViewerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let document = Document::load(path)?;

    let mut config = config;
    if std::env::var_os("NO_COLOR").is_some() {
        config.ascii = true;
    }
    let tick_rate = config.tick_rate_ms;

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app sized to the real terminal
    let mut app = App::new(document, path.to_path_buf(), config);
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    let mut events = EventHandler::new(tick_rate);

    // Main loop
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| view::render(app, frame))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    let action = event::key_to_action(key);
                    app.handle_action(action);
                }
                Event::Mouse(mouse) => app.on_mouse(mouse),
                Event::Tick => app.tick(),
                Event::Resize(width, height) => app.on_resize(width, height),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Version of the TUI crate.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_package() {
        assert_eq!(tui_version(), env!("CARGO_PKG_VERSION"));
    }
}

#[cfg(test)]
mod navigation_tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use folio_core::FocusZone;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // ========================================================================
    // Key mapping
    // ========================================================================

    #[test]
    fn test_ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(key), Action::Quit);
    }

    #[test]
    fn test_alt_digit_maps_to_shortcut() {
        let key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT);
        assert_eq!(key_to_action(key), Action::Shortcut('2'));
    }

    #[test]
    fn test_plain_digit_is_not_a_shortcut() {
        let key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(key_to_action(key), Action::None);
    }

    #[test]
    fn test_back_tab_cycles_focus_back() {
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_to_action(key), Action::FocusPrev);
    }

    #[test]
    fn test_space_selects() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_to_action(key), Action::Select);
    }

    // ========================================================================
    // Tab navigation
    // ========================================================================

    #[test]
    fn test_quit_action_quits() {
        let mut app = create_test_app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrow_switches_day_and_focuses_panel() {
        let mut app = create_test_app();
        assert_eq!(app.page.focus_zone(), FocusZone::Strip);

        app.handle_action(Action::Right);
        assert_eq!(app.page.strip().active_button(), Some(1));
        // Activating a day hands focus to its panel.
        assert_eq!(app.page.focus_zone(), FocusZone::Panel);
    }

    #[test]
    fn test_tabs_wrap_at_the_ends() {
        let mut app = create_test_app();
        app.handle_action(Action::Left);
        assert_eq!(app.page.strip().active_button(), Some(2));

        app.handle_action(Action::FocusNext);
        assert_eq!(app.page.focus_zone(), FocusZone::Strip);
        app.handle_action(Action::Right);
        assert_eq!(app.page.strip().active_button(), Some(0));
    }

    #[test]
    fn test_reselecting_open_tab_still_focuses_panel() {
        let mut app = create_test_app();
        assert_eq!(app.page.focus_zone(), FocusZone::Strip);
        app.handle_action(Action::Select);
        assert_eq!(app.page.strip().active_button(), Some(0));
        assert_eq!(app.page.focus_zone(), FocusZone::Panel);
    }

    #[test]
    fn test_tab_toggles_focus_zone() {
        let mut app = create_test_app();
        app.handle_action(Action::FocusNext);
        assert_eq!(app.page.focus_zone(), FocusZone::Panel);
        app.handle_action(Action::FocusNext);
        assert_eq!(app.page.focus_zone(), FocusZone::Strip);
    }

    #[test]
    fn test_help_overlay_closes_on_any_key_and_swallows_it() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        app.handle_action(Action::Right);
        assert!(!app.show_help);
        // The key that closed help did not navigate.
        assert_eq!(app.page.strip().active_button(), Some(0));
    }

    #[test]
    fn test_shortcut_jumps_to_day() {
        let mut app = create_test_app();
        app.handle_action(Action::Shortcut('3'));
        assert_eq!(app.page.strip().active_button(), Some(2));
        assert_eq!(app.page.focus_zone(), FocusZone::Panel);
    }

    #[test]
    fn test_unbound_shortcut_is_ignored() {
        let mut app = create_test_app();
        app.handle_action(Action::Shortcut('9'));
        assert_eq!(app.page.strip().active_button(), Some(0));
        assert_eq!(app.page.focus_zone(), FocusZone::Strip);
    }

    // ========================================================================
    // Mouse: swipes and clicks
    // ========================================================================

    #[test]
    fn test_swipe_left_advances_day() {
        let mut app = create_test_app();
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 10));
        assert_eq!(app.page.strip().active_button(), Some(1));
    }

    #[test]
    fn test_swipe_right_goes_back_with_wraparound() {
        let mut app = create_test_app();
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 40, 10));
        assert_eq!(app.page.strip().active_button(), Some(2));
    }

    #[test]
    fn test_drag_at_threshold_is_a_click_not_a_swipe() {
        let mut app = create_test_app();
        // Six columns is exactly the threshold; a swipe needs more.
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 10));
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 34, 10));
        assert_eq!(app.page.strip().active_button(), Some(0));
        // The click landed in the panel body and focused it.
        assert_eq!(app.page.focus_zone(), FocusZone::Panel);
    }

    #[test]
    fn test_click_on_tab_bar_selects_that_day() {
        let mut app = create_test_app();
        // "[2] Day 2" starts at column 12 on the tab row.
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 16, 1));
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 18, 1));
        assert_eq!(app.page.strip().active_button(), Some(1));
        assert_eq!(app.page.focus_zone(), FocusZone::Panel);
    }

    #[test]
    fn test_wheel_scroll_clamps_when_content_fits() {
        let mut app = create_test_app();
        app.on_mouse(mouse(MouseEventKind::ScrollDown, 40, 10));
        let ctx = app.page.active_context().expect("active panel");
        assert_eq!(ctx.scroll, 0);
    }

    // ========================================================================
    // Panel actions
    // ========================================================================

    #[test]
    fn test_enter_toggles_accordion_under_cursor() {
        let mut app = create_test_app();
        app.handle_action(Action::FocusNext);
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        let expanded = app
            .page
            .accordions(0)
            .iter()
            .any(folio_core::Accordion::is_expanded);
        assert!(expanded);

        app.handle_action(Action::Select);
        let expanded = app
            .page
            .accordions(0)
            .iter()
            .any(folio_core::Accordion::is_expanded);
        assert!(!expanded);
    }

    #[test]
    fn test_expand_all_opens_every_panel_and_notifies() {
        let mut app = create_test_app();
        app.handle_action(Action::ExpandAll);
        for panel in 0..3 {
            assert!(app
                .page
                .accordions(panel)
                .iter()
                .all(folio_core::Accordion::is_expanded));
        }
        assert!(app
            .notification
            .as_deref()
            .is_some_and(|n| n.contains("Expanded")));
    }

    #[test]
    fn test_collapse_all_closes_every_panel() {
        let mut app = create_test_app();
        app.handle_action(Action::ExpandAll);
        app.handle_action(Action::CollapseAll);
        for panel in 0..3 {
            assert!(!app
                .page
                .accordions(panel)
                .iter()
                .any(folio_core::Accordion::is_expanded));
        }
    }

    #[test]
    fn test_notification_expires_after_ticks() {
        let mut app = create_test_app();
        app.handle_action(Action::ExpandAll);
        assert!(app.notification.is_some());
        for _ in 0..200 {
            app.tick();
        }
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_print_writes_file_next_to_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let doc_path = dir.path().join("trip.json");
        let mut app = App::new(
            folio_core::Document::sample(),
            doc_path,
            ViewerConfig::default(),
        );

        app.handle_action(Action::Print);

        let printed =
            std::fs::read_to_string(dir.path().join("trip.txt")).expect("printable copy");
        assert!(printed.contains("Lisbon Long Weekend"));
        // Print preparation expands accordions, so body text is present.
        assert!(printed.contains("Viva Viagem"));
        assert!(app
            .notification
            .as_deref()
            .is_some_and(|n| n.contains("Saved printable copy")));
    }

    #[test]
    fn test_create_test_app_has_three_days() {
        let app = create_test_app();
        assert_eq!(app.page.strip().len(), 3);
    }
}
