//! Application state for the folio TUI.

use std::path::PathBuf;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::{
    Activated, Document, FocusZone, PageState, SwipeTracker, ViewerConfig, SCROLL_STEP,
};
use ratatui::layout::{Position, Rect};

use crate::event::Action;
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::view;
use crate::widgets::tab_bar;

/// Ticks a notification stays visible (3 seconds at the default tick rate).
const NOTIFICATION_TTL: u64 = 60;

/// Main application state.
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether the help overlay is showing.
    pub show_help: bool,
    /// The viewed page: tabs, panels, focus, animations.
    pub page: PageState,
    /// Where the document was loaded from; the printable copy lands next to it.
    pub doc_path: PathBuf,
    pub config: ViewerConfig,
    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,
    /// Tick counter for animations.
    pub tick_count: u64,
    /// Transient status message shown in the title row.
    pub notification: Option<String>,
    notification_ttl: u64,
    swipe: SwipeTracker,
    press: Option<(u16, u16)>,
    term_width: u16,
    term_height: u16,
}

impl App {
    /// Create a new application for `document`.
    pub fn new(document: Document, doc_path: PathBuf, config: ViewerConfig) -> Self {
        let theme = match Theme::by_name(&config.theme) {
            Some(theme) => theme,
            None => {
                tracing::warn!(name = %config.theme, "unknown theme, falling back to mocha");
                Theme::mocha()
            }
        };
        let mode = if config.ascii {
            IconMode::Ascii
        } else {
            IconMode::Unicode
        };

        let (term_width, term_height) = (80, 24);
        let content = view::chrome(Rect::new(0, 0, term_width, term_height), config.show_hints)
            .content;
        let mut page = PageState::new(
            document,
            usize::from(content.width),
            usize::from(content.height),
        );
        page.set_animate(config.animate);

        Self {
            should_quit: false,
            show_help: false,
            page,
            doc_path,
            config,
            theme,
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            tick_count: 0,
            notification: None,
            notification_ttl: 0,
            swipe: SwipeTracker::new(),
            press: None,
            term_width,
            term_height,
        }
    }

    /// Handle an action from a key event.
    pub fn handle_action(&mut self, action: Action) {
        // The help overlay closes on any key and swallows it.
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Help => {
                self.show_help = true;
                return;
            }
            Action::Print => {
                self.print_to_file();
                return;
            }
            Action::ExpandAll => {
                self.page.expand_all();
                self.set_notification("Expanded all sections");
                return;
            }
            Action::CollapseAll => {
                self.page.collapse_all();
                self.set_notification("Collapsed all sections");
                return;
            }
            Action::Shortcut(digit) => {
                self.page.shortcut(digit);
                return;
            }
            Action::FocusNext | Action::FocusPrev => {
                self.page.toggle_focus();
                return;
            }
            _ => {}
        }

        match self.page.focus_zone() {
            FocusZone::Strip => self.handle_strip_action(action),
            FocusZone::Panel => self.handle_panel_action(action),
        }
    }

    fn handle_strip_action(&mut self, action: Action) {
        match action {
            Action::Left | Action::Up => self.page.prev_tab(),
            Action::Right | Action::Down => self.page.next_tab(),
            Action::First => self.page.first_tab(),
            Action::Last => self.page.last_tab(),
            // Re-selecting the open tab still hands focus to its panel.
            Action::Select => {
                if let Some(index) = self.page.strip().active_button() {
                    self.page.select_tab(index);
                }
            }
            _ => {}
        }
    }

    fn handle_panel_action(&mut self, action: Action) {
        match action {
            Action::Up => self.page.cursor_prev(),
            Action::Down => self.page.cursor_next(),
            Action::First => self.page.scroll_to_top(),
            Action::Last => self.page.scroll_to_bottom(),
            Action::PageUp => self.page.page_up(),
            Action::PageDown => self.page.page_down(),
            Action::Select => {
                let outcome = self.page.activate_cursor();
                self.apply_activation(outcome);
            }
            _ => {}
        }
    }

    /// Handle a mouse event. A press-drag-release beyond the swipe threshold
    /// switches days; a short release is a click at the press position.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.begin(mouse.column);
                self.press = Some((mouse.column, mouse.row));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let press = self.press.take();
                match self.swipe.end(mouse.column) {
                    Some(direction) => self.page.swipe(direction),
                    None => {
                        if let Some((x, y)) = press {
                            self.click(x, y);
                        }
                    }
                }
            }
            MouseEventKind::ScrollDown => self.page.scroll_down(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.page.scroll_up(SCROLL_STEP),
            _ => {}
        }
    }

    fn click(&mut self, x: u16, y: u16) {
        let regions = view::chrome(
            Rect::new(0, 0, self.term_width, self.term_height),
            self.config.show_hints,
        );

        if regions.tabs.contains(Position::new(x, y)) {
            if let Some(index) = tab_bar::hit(self.page.strip(), regions.tabs, x) {
                self.page.select_tab(index);
            }
            return;
        }

        if regions.content.contains(Position::new(x, y)) {
            let Some(scroll) = self.page.active_context().map(|ctx| ctx.scroll) else {
                return;
            };
            let row = scroll + usize::from(y - regions.content.y);
            let outcome = self.page.click_row(row);
            self.apply_activation(outcome);
        }
    }

    fn apply_activation(&mut self, outcome: Option<Activated>) {
        if let Some(Activated::Link { url }) = outcome {
            self.copy_link(&url);
        }
    }

    fn copy_link(&mut self, url: &str) {
        let copied = arboard::Clipboard::new().and_then(|mut clipboard| {
            clipboard.set_text(url.to_string())
        });
        match copied {
            Ok(()) => self.set_notification(format!("Copied {url}")),
            Err(err) => {
                tracing::warn!(%err, "clipboard unavailable");
                self.set_notification(format!("Open {url}"));
            }
        }
    }

    /// Expand everything and write a plain-text copy next to the document.
    fn print_to_file(&mut self) {
        self.page.prepare_print();
        let text = folio_core::render_printable(&self.page);
        let path = self.doc_path.with_extension("txt");
        match std::fs::write(&path, text) {
            Ok(()) => self.set_notification(format!("Saved printable copy to {}", path.display())),
            Err(err) => {
                tracing::error!(%err, path = %path.display(), "failed to write printable copy");
                self.set_notification("Could not write printable copy");
            }
        }
    }

    /// Handle a terminal resize.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.term_width = width;
        self.term_height = height;
        let content = view::chrome(Rect::new(0, 0, width, height), self.config.show_hints).content;
        self.page
            .on_resize(usize::from(content.width), usize::from(content.height));
    }

    /// Advance animations and expire notifications. Called on every tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
        self.page.tick(self.config.tick_rate_ms);
    }

    fn set_notification(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.notification_ttl = NOTIFICATION_TTL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_starts_on_first_day() {
        let app = App::new(
            Document::sample(),
            PathBuf::from("itinerary.json"),
            ViewerConfig::default(),
        );
        assert!(!app.should_quit);
        assert_eq!(app.page.strip().active_button(), Some(0));
        assert_eq!(app.page.focus_zone(), FocusZone::Strip);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_mocha() {
        let config = ViewerConfig {
            theme: "solarized".to_string(),
            ..ViewerConfig::default()
        };
        let app = App::new(Document::sample(), PathBuf::from("itinerary.json"), config);
        assert_eq!(app.theme.base, Theme::mocha().base);
    }

    #[test]
    fn test_ascii_config_selects_ascii_icons() {
        let config = ViewerConfig {
            ascii: true,
            ..ViewerConfig::default()
        };
        let app = App::new(Document::sample(), PathBuf::from("itinerary.json"), config);
        assert_eq!(app.icons.mode(), IconMode::Ascii);
        assert_eq!(app.borders.mode(), IconMode::Ascii);
    }

    #[test]
    fn test_animation_off_reveals_on_first_armed_tick() {
        let config = ViewerConfig {
            animate: false,
            ..ViewerConfig::default()
        };
        let mut app = App::new(Document::sample(), PathBuf::from("itinerary.json"), config);
        // Two ticks at the default rate pass the arm delay.
        app.tick();
        app.tick();
        let ctx = app.page.active_context().unwrap();
        assert!(ctx.reveal.revealed_count() > 0);
    }
}
