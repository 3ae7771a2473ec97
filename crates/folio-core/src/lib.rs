//! folio-core: Headless state for the folio itinerary viewer
//!
//! This crate holds everything that does not touch a terminal:
//! - The document model and its JSON form
//! - Tab strip, accordion, reveal, swipe and focus state machines
//! - Whole-page orchestration with layout, scrolling and a cursor
//! - Plain text rendering for print and export
//! - Document lints and viewer configuration

pub mod accordion;
pub mod check;
pub mod config;
pub mod document;
pub mod focus;
pub mod gesture;
pub mod layout;
pub mod page;
pub mod printable;
pub mod reveal;
pub mod shortcuts;
pub mod tabs;
#[cfg(test)]
pub mod test_log;

// Re-export commonly used types
pub use accordion::{Accordion, COLLAPSED_LABEL, EXPANDED_LABEL};
pub use check::{check_document, CheckReport, Finding, Severity};
pub use config::{config_path, log_path, ConfigError, ViewerConfig};
pub use document::{Block, Document, DocumentError, Panel, TabButton, TimelineEntry};
pub use focus::{FocusManager, FocusZone};
pub use gesture::{SwipeDirection, SwipeTracker, SWIPE_THRESHOLD};
pub use layout::{layout_panel, measure_body, EntrySlot, Item, ItemKind, PanelLayout};
pub use page::{Activated, PageState, PanelContext, LINK_FLASH_MS, SCROLL_STEP};
pub use printable::{render_printable, PRINT_WIDTH};
pub use reveal::{
    ease_out_cubic, slide_offset, RevealController, RevealPhase, REVEAL_ARM_DELAY_MS,
    REVEAL_DURATION_MS,
};
pub use shortcuts::{shortcut_target, SHORTCUT_TARGETS};
pub use tabs::TabStrip;

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
