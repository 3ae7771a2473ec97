//! Reusable widgets for the folio TUI.

pub mod footer;
pub mod panel;
pub mod tab_bar;

pub use footer::{hints_for_zone, FooterHints, KeyHint};
pub use panel::PanelWidget;
pub use tab_bar::TabBar;
