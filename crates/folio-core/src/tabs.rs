//! Tab strip state.
//!
//! Tracks which tab button is active and resolves it to a panel. Selection
//! always moves the button highlight; the panel only follows when a panel
//! with the button's target id actually exists. A button whose target
//! resolves to nothing deactivates every panel and leaves the page blank,
//! which is surfaced by `check` rather than papered over here.

use crate::document::{Document, TabButton};

/// Tab strip over a document's buttons.
#[derive(Debug, Clone)]
pub struct TabStrip {
    buttons: Vec<TabButton>,
    panel_ids: Vec<String>,
    active: Option<usize>,
}

impl TabStrip {
    /// Build a strip from a document, activating the first button.
    pub fn from_document(doc: &Document) -> Self {
        let mut strip = Self {
            buttons: doc.buttons.clone(),
            panel_ids: doc.panels.iter().map(|p| p.id.clone()).collect(),
            active: None,
        };
        if !strip.buttons.is_empty() {
            strip.active = Some(0);
        }
        strip
    }

    /// All buttons in display order.
    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    /// Number of buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether the strip has no buttons.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Index of the active button, if any.
    pub fn active_button(&self) -> Option<usize> {
        self.active
    }

    /// Id of the active panel. `None` when no button is active or the
    /// active button's target matches no panel.
    pub fn active_panel_id(&self) -> Option<&str> {
        let button = &self.buttons[self.active?];
        self.panel_ids
            .iter()
            .find(|id| **id == button.target)
            .map(String::as_str)
    }

    /// Index of the active panel in document order, if it resolves.
    pub fn active_panel(&self) -> Option<usize> {
        let button = &self.buttons[self.active?];
        self.panel_ids.iter().position(|id| *id == button.target)
    }

    /// Activate the button at `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` when a selection was applied, whether or not the
    /// button's panel resolved.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.buttons.len() {
            return false;
        }
        self.active = Some(index);
        tracing::debug!(index, target_id = %self.buttons[index].target, "tab selected");
        if self.active_panel().is_none() {
            tracing::debug!(
                target_id = %self.buttons[index].target,
                "selected tab has no matching panel"
            );
        }
        true
    }

    /// Activate the first button whose target is `target`. Unknown targets
    /// are ignored.
    pub fn select_target(&mut self, target: &str) -> bool {
        match self.buttons.iter().position(|b| b.target == target) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Activate the next button, wrapping from the last back to the first.
    pub fn next(&mut self) -> bool {
        if self.buttons.is_empty() {
            return false;
        }
        let index = match self.active {
            Some(i) if i < self.buttons.len() - 1 => i + 1,
            _ => 0,
        };
        self.select(index)
    }

    /// Activate the previous button, wrapping from the first to the last.
    pub fn prev(&mut self) -> bool {
        if self.buttons.is_empty() {
            return false;
        }
        let index = match self.active {
            Some(i) if i > 0 => i - 1,
            _ => self.buttons.len() - 1,
        };
        self.select(index)
    }

    /// Activate the first button.
    pub fn first(&mut self) -> bool {
        if self.buttons.is_empty() {
            return false;
        }
        self.select(0)
    }

    /// Activate the last button.
    pub fn last(&mut self) -> bool {
        if self.buttons.is_empty() {
            return false;
        }
        self.select(self.buttons.len() - 1)
    }
}
