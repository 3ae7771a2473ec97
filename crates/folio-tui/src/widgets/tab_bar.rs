//! Tab bar widget for the day strip.

use folio_core::TabStrip;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const SEPARATOR: &str = " │ ";
const SEPARATOR_WIDTH: u16 = 3;

/// A horizontal tab bar over the document's day buttons.
///
/// Every button renders, including ones whose target panel does not exist;
/// the highlight follows the strip's active index either way.
pub struct TabBar<'a> {
    strip: &'a TabStrip,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TabBar<'a> {
    /// Create a new tab bar over `strip`.
    pub fn new(strip: &'a TabStrip, theme: &'a Theme) -> Self {
        Self {
            strip,
            theme,
            focused: false,
        }
    }

    /// Mark the strip as the focused zone.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

fn button_text(index: usize, label: &str) -> String {
    format!("[{}] {}", index + 1, label)
}

/// Cell layout of the bar: (start column, width) per button, in order.
fn segments(strip: &TabStrip) -> Vec<(u16, u16)> {
    let mut out = Vec::with_capacity(strip.len());
    let mut x: u16 = 0;
    for (i, button) in strip.buttons().iter().enumerate() {
        if i > 0 {
            x = x.saturating_add(SEPARATOR_WIDTH);
        }
        let width = u16::try_from(button_text(i, &button.label).width()).unwrap_or(u16::MAX);
        out.push((x, width));
        x = x.saturating_add(width);
    }
    out
}

/// Button index under absolute column `x`, if any. Separators miss.
pub fn hit(strip: &TabStrip, area: Rect, x: u16) -> Option<usize> {
    let rel = x.checked_sub(area.x)?;
    segments(strip)
        .iter()
        .position(|&(start, width)| rel >= start && rel < start.saturating_add(width))
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let active = self.strip.active_button();
        let mut spans = Vec::new();
        for (i, button) in self.strip.buttons().iter().enumerate() {
            let is_active = active == Some(i);

            // Add separator if not first
            if i > 0 {
                spans.push(Span::styled(
                    SEPARATOR,
                    Style::default().fg(self.theme.muted),
                ));
            }

            // Number hint
            spans.push(Span::styled(
                format!("[{}] ", i + 1),
                if is_active {
                    Style::default()
                        .fg(self.theme.primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.muted)
                },
            ));

            // Button label
            let mut style = if is_active {
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.subtext)
            };
            if is_active && self.focused {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(button.label.clone(), style));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
