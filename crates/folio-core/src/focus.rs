//! Focus zones.
//!
//! Input is routed to one of two zones: the tab strip or the active panel.
//! Tab cycles between them. Every tab selection that lands on a real panel
//! pulls focus into that panel, including reselecting the current tab, so
//! arrow navigation on the strip ends with the panel focused and ready to
//! scroll. A selection whose panel does not resolve leaves focus where it
//! was.

/// Where key input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusZone {
    /// The row of tab buttons.
    #[default]
    Strip,
    /// The active panel's content.
    Panel,
}

/// Tracks the focused zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusManager {
    zone: FocusZone,
}

impl FocusManager {
    /// Focus starts on the strip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused zone.
    pub fn zone(&self) -> FocusZone {
        self.zone
    }

    /// Move focus to the other zone.
    pub fn toggle(&mut self) {
        self.zone = match self.zone {
            FocusZone::Strip => FocusZone::Panel,
            FocusZone::Panel => FocusZone::Strip,
        };
    }

    /// Put focus on a specific zone.
    pub fn set(&mut self, zone: FocusZone) {
        self.zone = zone;
    }

    /// React to a tab selection. `panel_resolved` says whether the selected
    /// button's panel exists; when it does, focus moves into the panel.
    pub fn on_selection(&mut self, panel_resolved: bool) {
        if panel_resolved {
            self.zone = FocusZone::Panel;
        }
    }
}
