//! Horizontal swipe detection.
//!
//! A swipe is a press and release far enough apart horizontally. Anything
//! shorter is left for the caller to treat as a plain click. Only the
//! horizontal distance matters; vertical travel is ignored.

/// Minimum column distance, exclusive, for a release to count as a swipe.
pub const SWIPE_THRESHOLD: u16 = 6;

/// Direction the pointer travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pointer moved left; advances to the next tab.
    Left,
    /// Pointer moved right; goes back to the previous tab.
    Right,
}

/// Tracks one press-to-release gesture at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_column: Option<u16>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the press column.
    pub fn begin(&mut self, column: u16) {
        self.start_column = Some(column);
    }

    /// Whether a press is waiting for its release.
    pub fn is_tracking(&self) -> bool {
        self.start_column.is_some()
    }

    /// Record the release column and resolve the gesture.
    ///
    /// Returns the swipe direction when the horizontal distance strictly
    /// exceeds [`SWIPE_THRESHOLD`], `None` for a short travel (a click) or a
    /// release with no matching press.
    pub fn end(&mut self, column: u16) -> Option<SwipeDirection> {
        let start = self.start_column.take()?;
        let delta = i32::from(column) - i32::from(start);
        if delta < -i32::from(SWIPE_THRESHOLD) {
            Some(SwipeDirection::Left)
        } else if delta > i32::from(SWIPE_THRESHOLD) {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// Drop any pending press.
    pub fn cancel(&mut self) {
        self.start_column = None;
    }
}
