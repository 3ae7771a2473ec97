//! Scroll-triggered reveal of timeline entries.
//!
//! Entries start hidden and animate in the first time enough of them scrolls
//! into view. The animation runs to completion even if the entry scrolls
//! back out mid-flight, and a revealed entry never hides again. The whole
//! controller stays disarmed for a short startup delay so a page that opens
//! mid-document does not fire every animation on the first frame.

/// Duration of one reveal animation.
pub const REVEAL_DURATION_MS: u64 = 600;

/// Delay after startup before any reveal can begin.
pub const REVEAL_ARM_DELAY_MS: u64 = 100;

/// Fraction of an entry's rows that must be in view to trigger its reveal.
pub const REVEAL_VISIBLE_FRACTION: f32 = 0.1;

/// Rows shaved off the bottom of the viewport when judging visibility, so
/// entries reveal slightly after they clear the bottom edge.
pub const REVEAL_BOTTOM_MARGIN: usize = 3;

/// Rows an entry slides up while revealing.
pub const REVEAL_SLIDE_ROWS: u16 = 1;

/// Phase of a single entry's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet triggered; the entry is not drawn.
    Hidden,
    /// Animation in flight.
    Revealing,
    /// Fully visible, final.
    Revealed,
}

#[derive(Debug, Clone)]
struct RevealState {
    phase: RevealPhase,
    elapsed_ms: u64,
}

/// Reveal state for every timeline entry of one panel, in panel order.
#[derive(Debug, Clone)]
pub struct RevealController {
    items: Vec<RevealState>,
    clock_ms: u64,
    instant: bool,
}

impl RevealController {
    /// Controller for `count` entries, all hidden, disarmed.
    pub fn new(count: usize) -> Self {
        Self {
            items: vec![
                RevealState {
                    phase: RevealPhase::Hidden,
                    elapsed_ms: 0,
                };
                count
            ],
            clock_ms: 0,
            instant: false,
        }
    }

    /// With animation off, observed entries jump straight to revealed.
    pub fn set_instant(&mut self, instant: bool) {
        self.instant = instant;
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the controller tracks no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the startup delay has elapsed.
    pub fn armed(&self) -> bool {
        self.clock_ms >= REVEAL_ARM_DELAY_MS
    }

    /// Phase of entry `index`. Out-of-range entries report as revealed so a
    /// stale index shows content rather than blanking it.
    pub fn phase(&self, index: usize) -> RevealPhase {
        self.items.get(index).map_or(RevealPhase::Revealed, |s| s.phase)
    }

    /// Animation progress of entry `index` in `0.0..=1.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, index: usize) -> f32 {
        match self.items.get(index) {
            Some(s) => match s.phase {
                RevealPhase::Hidden => 0.0,
                RevealPhase::Revealing => {
                    (s.elapsed_ms as f32 / REVEAL_DURATION_MS as f32).clamp(0.0, 1.0)
                }
                RevealPhase::Revealed => 1.0,
            },
            None => 1.0,
        }
    }

    /// Count of entries that finished revealing.
    pub fn revealed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|s| s.phase == RevealPhase::Revealed)
            .count()
    }

    /// Begin revealing any hidden entry named in `visible`. Ignored while
    /// disarmed. Entries already revealing or revealed are untouched, so
    /// repeated sightings cannot restart an animation.
    pub fn observe_visible(&mut self, visible: &[usize]) {
        if !self.armed() {
            return;
        }
        for &index in visible {
            if let Some(item) = self.items.get_mut(index) {
                if item.phase == RevealPhase::Hidden {
                    item.phase = if self.instant {
                        RevealPhase::Revealed
                    } else {
                        RevealPhase::Revealing
                    };
                    item.elapsed_ms = 0;
                    tracing::debug!(entry = index, instant = self.instant, "reveal triggered");
                }
            }
        }
    }

    /// Advance the startup clock and all in-flight animations.
    pub fn tick(&mut self, delta_ms: u64) {
        self.clock_ms = self.clock_ms.saturating_add(delta_ms);
        for item in &mut self.items {
            if item.phase == RevealPhase::Revealing {
                item.elapsed_ms = item.elapsed_ms.saturating_add(delta_ms);
                if item.elapsed_ms >= REVEAL_DURATION_MS {
                    item.phase = RevealPhase::Revealed;
                }
            }
        }
    }
}

/// Cubic ease-out, the curve the reveal animation follows.
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Rows an entry is shifted down at `progress` through its reveal.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn slide_offset(progress: f32) -> u16 {
    ((1.0 - ease_out_cubic(progress)) * f32::from(REVEAL_SLIDE_ROWS)).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(count: usize) -> RevealController {
        let mut reveal = RevealController::new(count);
        reveal.tick(REVEAL_ARM_DELAY_MS);
        reveal
    }

    #[test]
    fn test_starts_hidden_and_disarmed() {
        let reveal = RevealController::new(3);
        assert!(!reveal.armed());
        for i in 0..3 {
            assert_eq!(reveal.phase(i), RevealPhase::Hidden);
            assert!(reveal.progress(i).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_observations_ignored_before_arm_delay() {
        let mut reveal = RevealController::new(2);
        reveal.observe_visible(&[0, 1]);
        assert_eq!(reveal.phase(0), RevealPhase::Hidden);

        reveal.tick(REVEAL_ARM_DELAY_MS);
        reveal.observe_visible(&[0]);
        assert_eq!(reveal.phase(0), RevealPhase::Revealing);
        assert_eq!(reveal.phase(1), RevealPhase::Hidden);
    }

    #[test]
    fn test_reveal_completes_after_duration() {
        let mut reveal = armed(1);
        reveal.observe_visible(&[0]);
        reveal.tick(REVEAL_DURATION_MS / 2);
        assert_eq!(reveal.phase(0), RevealPhase::Revealing);
        assert!(reveal.progress(0) > 0.4 && reveal.progress(0) < 0.6);

        reveal.tick(REVEAL_DURATION_MS / 2);
        assert_eq!(reveal.phase(0), RevealPhase::Revealed);
        assert!((reveal.progress(0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_animation_survives_scrolling_away() {
        let mut reveal = armed(1);
        reveal.observe_visible(&[0]);
        // Entry leaves the viewport; nothing observes it again.
        reveal.tick(REVEAL_DURATION_MS);
        assert_eq!(reveal.phase(0), RevealPhase::Revealed);
    }

    #[test]
    fn test_revealed_is_monotonic() {
        let mut reveal = armed(1);
        reveal.observe_visible(&[0]);
        reveal.tick(REVEAL_DURATION_MS);
        // Repeated sightings and ticks must not restart the animation.
        reveal.observe_visible(&[0]);
        reveal.tick(REVEAL_DURATION_MS);
        assert_eq!(reveal.phase(0), RevealPhase::Revealed);
        assert_eq!(reveal.revealed_count(), 1);
    }

    #[test]
    fn test_instant_mode_skips_the_animation() {
        let mut reveal = armed(2);
        reveal.set_instant(true);
        reveal.observe_visible(&[0]);
        assert_eq!(reveal.phase(0), RevealPhase::Revealed);
        assert!((reveal.progress(0) - 1.0).abs() < f32::EPSILON);
        // Unobserved entries still wait their turn.
        assert_eq!(reveal.phase(1), RevealPhase::Hidden);
    }

    #[test]
    fn test_trigger_logs_once_per_entry() {
        let mut reveal = armed(1);
        let logs = crate::test_log::capture_logs(|| {
            reveal.observe_visible(&[0]);
            // A repeated sighting is not a second trigger.
            reveal.observe_visible(&[0]);
        });
        assert!(logs.contains("entry=0"));
        assert_eq!(logs.matches("reveal triggered").count(), 1);
    }

    #[test]
    fn test_out_of_range_reports_revealed() {
        let reveal = RevealController::new(1);
        assert_eq!(reveal.phase(9), RevealPhase::Revealed);
        assert!((reveal.progress(9) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        // Front-loaded: past half the curve well before half the time.
        assert!(ease_out_cubic(0.3) > 0.6);
    }

    #[test]
    fn test_slide_offset_decreases_to_zero() {
        assert_eq!(slide_offset(0.0), REVEAL_SLIDE_ROWS);
        assert_eq!(slide_offset(1.0), 0);
    }
}
