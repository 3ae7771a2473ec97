//! Accordion section state.
//!
//! An accordion is a header row with a trigger label and a body that is only
//! laid out while expanded. The body height is measured by the caller at the
//! moment of expansion and stored here, the same way a max-height is pinned
//! when a section opens. A resize invalidates stored heights, so expanded
//! sections must be remeasured then (see `PageState::on_resize`).

/// Trigger label while collapsed.
pub const COLLAPSED_LABEL: &str = "Show Details";

/// Trigger label while expanded.
pub const EXPANDED_LABEL: &str = "Hide Details";

/// State of a single accordion section.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    expanded: bool,
    content_height: usize,
}

impl Accordion {
    /// New collapsed section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the body is currently shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Body rows reserved in the layout. Zero while collapsed.
    pub fn content_height(&self) -> usize {
        if self.expanded {
            self.content_height
        } else {
            0
        }
    }

    /// The trigger label for the current state.
    pub fn trigger_label(&self) -> &'static str {
        if self.expanded {
            EXPANDED_LABEL
        } else {
            COLLAPSED_LABEL
        }
    }

    /// Toggle the section. `measured_height` is the body height at the
    /// current width, used only when this call expands.
    ///
    /// Returns the new expanded state.
    pub fn toggle(&mut self, measured_height: usize) -> bool {
        if self.expanded {
            self.collapse();
        } else {
            self.expand(measured_height);
        }
        tracing::debug!(
            expanded = self.expanded,
            content_height = self.content_height,
            "accordion toggled"
        );
        self.expanded
    }

    /// Expand if collapsed. Already-expanded sections are left alone so a
    /// bulk expand never flips one closed.
    pub fn expand(&mut self, measured_height: usize) {
        if !self.expanded {
            self.expanded = true;
            self.content_height = measured_height;
        }
    }

    /// Collapse if expanded. The stored height is dropped; the next expand
    /// measures afresh.
    pub fn collapse(&mut self) {
        if self.expanded {
            self.expanded = false;
            self.content_height = 0;
        }
    }

    /// Update the stored height after a width change. Collapsed sections
    /// keep no height and are ignored.
    pub fn remeasure(&mut self, measured_height: usize) {
        if self.expanded {
            self.content_height = measured_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let acc = Accordion::new();
        assert!(!acc.is_expanded());
        assert_eq!(acc.content_height(), 0);
        assert_eq!(acc.trigger_label(), COLLAPSED_LABEL);
    }

    #[test]
    fn test_toggle_expands_with_measured_height() {
        let mut acc = Accordion::new();
        assert!(acc.toggle(4));
        assert!(acc.is_expanded());
        assert_eq!(acc.content_height(), 4);
        assert_eq!(acc.trigger_label(), EXPANDED_LABEL);
    }

    #[test]
    fn test_toggle_twice_returns_to_collapsed() {
        let mut acc = Accordion::new();
        acc.toggle(4);
        assert!(!acc.toggle(4));
        assert!(!acc.is_expanded());
        assert_eq!(acc.content_height(), 0);
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut acc = Accordion::new();
        acc.expand(4);
        // A second expand must not clobber the measured height with a
        // stale value.
        acc.expand(9);
        assert!(acc.is_expanded());
        assert_eq!(acc.content_height(), 4);
    }

    #[test]
    fn test_collapse_when_collapsed_is_noop() {
        let mut acc = Accordion::new();
        acc.collapse();
        assert!(!acc.is_expanded());
    }

    #[test]
    fn test_toggle_logs_both_directions() {
        let mut acc = Accordion::new();
        let logs = crate::test_log::capture_logs(|| {
            acc.toggle(4);
            acc.toggle(4);
        });
        assert!(logs.contains("accordion toggled"));
        assert!(logs.contains("expanded=true"));
        assert!(logs.contains("expanded=false"));
    }

    #[test]
    fn test_remeasure_only_applies_when_expanded() {
        let mut acc = Accordion::new();
        acc.remeasure(7);
        assert_eq!(acc.content_height(), 0);

        acc.expand(4);
        acc.remeasure(7);
        assert_eq!(acc.content_height(), 7);
    }
}
