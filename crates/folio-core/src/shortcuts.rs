//! Global tab shortcuts.
//!
//! Alt with a digit jumps straight to one of three well-known panel ids,
//! from anywhere, regardless of focus. Digits without a mapping do nothing;
//! whether the mapped target exists in the document is the tab strip's
//! problem, not ours.

/// Panel ids reachable via Alt+1..Alt+3, in digit order.
pub const SHORTCUT_TARGETS: [&str; 3] = ["day1", "day2", "day3"];

/// Target panel id for a shortcut digit, if that digit is mapped.
pub fn shortcut_target(digit: char) -> Option<&'static str> {
    match digit {
        '1' => Some(SHORTCUT_TARGETS[0]),
        '2' => Some(SHORTCUT_TARGETS[1]),
        '3' => Some(SHORTCUT_TARGETS[2]),
        _ => None,
    }
}
