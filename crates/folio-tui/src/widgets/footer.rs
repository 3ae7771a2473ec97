//! Footer status bar widget.
//!
//! Minimal status bar format: `Panel │ Day 2 of 3            [Tab] focus │ [?] help`

use folio_core::FocusZone;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Alt+2").
    pub key: String,
    /// The action description (e.g., "focus", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the focused zone.
pub fn hints_for_zone(zone: FocusZone) -> Vec<KeyHint> {
    match zone {
        FocusZone::Strip => vec![
            KeyHint::new("h/l", "switch day"),
            KeyHint::new("Enter", "open"),
            KeyHint::new("Tab", "focus"),
            KeyHint::new("?", "help"),
        ],
        FocusZone::Panel => vec![
            KeyHint::new("j/k", "move"),
            KeyHint::new("Enter", "toggle"),
            KeyHint::new("p", "print"),
            KeyHint::new("?", "help"),
        ],
    }
}

/// Footer status bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    zone: FocusZone,
    /// One-based active tab and tab count.
    position: Option<(usize, usize)>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme, zone: FocusZone) -> Self {
        Self {
            hints,
            theme,
            zone,
            position: None,
        }
    }

    /// Set the tab position to display.
    #[must_use]
    pub fn position(mut self, position: Option<(usize, usize)>) -> Self {
        self.position = position;
        self
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        // Left side: zone │ position
        let zone_str = match self.zone {
            FocusZone::Strip => "Tabs",
            FocusZone::Panel => "Panel",
        };
        left_spans.push(Span::styled(
            zone_str,
            Style::default().fg(self.theme.primary),
        ));

        if let Some((current, total)) = self.position {
            left_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            left_spans.push(Span::styled(
                format!("Day {current} of {total}"),
                Style::default().fg(self.theme.subtext),
            ));
        }

        // Right side: hints (rendered right-aligned)
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }

            // Key in brackets
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                &hint.key,
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));

            // Action
            right_spans.push(Span::styled(
                &hint.action,
                Style::default().fg(self.theme.subtext),
            ));
        }

        // Calculate widths for alignment
        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
        let total_width = usize::from(area.width);

        // Add padding between left and right
        let padding = total_width.saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }

        // Combine left and right spans
        left_spans.extend(right_spans);

        let line = Line::from(left_spans);
        let paragraph = Paragraph::new(line).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_key_hint_creation() {
        let hint = KeyHint::new("Tab", "focus");
        assert_eq!(hint.key, "Tab");
        assert_eq!(hint.action, "focus");
    }

    #[test]
    fn test_strip_hints() {
        let hints = hints_for_zone(FocusZone::Strip);
        assert!(hints.iter().any(|h| h.key == "h/l"));
        assert!(hints.iter().any(|h| h.key == "?" && h.action == "help"));
    }

    #[test]
    fn test_panel_hints() {
        let hints = hints_for_zone(FocusZone::Panel);
        assert!(hints.iter().any(|h| h.key == "j/k"));
        assert!(hints.iter().any(|h| h.key == "p" && h.action == "print"));
    }

    #[test]
    fn test_render_aligns_hints_right() {
        let theme = Theme::mocha();
        let hints = hints_for_zone(FocusZone::Panel);
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme, FocusZone::Panel)
            .position(Some((2, 3)))
            .render(area, &mut buf);

        let rendered = buffer_to_string(&buf);
        assert!(rendered.starts_with("Panel │ Day 2 of 3"));
        assert!(rendered.trim_end().ends_with("[?] help"));
    }
}
