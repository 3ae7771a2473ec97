//! Content widget for the active day panel.
//!
//! Draws from the row layout computed in `folio_core::layout`, so clicks,
//! scrolling and reveal visibility all agree with what is on screen. Rows
//! above or below the scrolled viewport are skipped; timeline entries that
//! have not revealed yet leave their rows blank.

use folio_core::layout::{ACCORDION_INDENT, TIMELINE_DETAIL_INDENT};
use folio_core::{
    ease_out_cubic, slide_offset, Block, PanelContext, RevealPhase, TimelineEntry,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::theme::{IconSet, Theme};

/// Renders one panel's content into an already-bordered area.
pub struct PanelWidget<'a> {
    ctx: &'a PanelContext<'a>,
    theme: &'a Theme,
    icons: &'a IconSet,
    focused: bool,
}

impl<'a> PanelWidget<'a> {
    /// Create a panel widget for `ctx`.
    pub fn new(ctx: &'a PanelContext<'a>, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            ctx,
            theme,
            icons,
            focused: false,
        }
    }

    /// Mark the panel as the focused zone (enables the cursor highlight).
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Screen y for content `row`, or `None` when scrolled out of view.
    fn screen_y(&self, area: Rect, row: usize) -> Option<u16> {
        let offset = row.checked_sub(self.ctx.scroll)?;
        if offset >= usize::from(area.height) {
            return None;
        }
        u16::try_from(offset).ok().map(|o| area.y + o)
    }

    fn cursor_is_at(&self, block: usize, row: usize) -> bool {
        if !self.focused {
            return false;
        }
        let Some(cursor) = self.ctx.cursor else {
            return false;
        };
        self.ctx
            .layout
            .items
            .get(cursor)
            .is_some_and(|item| item.block == block && item.row == row)
    }

    fn draw_line(&self, area: Rect, buf: &mut Buffer, y: u16, line: &Line<'_>, selected: bool) {
        if selected {
            buf.set_style(
                Rect::new(area.x, y, area.width, 1),
                Style::default().bg(self.theme.overlay),
            );
        }
        buf.set_line(area.x, y, line, area.width);
    }

    fn render_paragraph(&self, area: Rect, buf: &mut Buffer, top: usize, text: &str) {
        let width = usize::from(area.width).max(1);
        for (i, wrapped) in wrap(text, width).iter().enumerate() {
            if let Some(y) = self.screen_y(area, top + i) {
                let line = Line::from(Span::styled(
                    wrapped.to_string(),
                    Style::default().fg(self.theme.text),
                ));
                buf.set_line(area.x, y, &line, area.width);
            }
        }
    }

    fn render_accordion(
        &self,
        area: Rect,
        buf: &mut Buffer,
        block: usize,
        top: usize,
        height: usize,
        title: &str,
        body: &[String],
        expanded: bool,
    ) {
        // Header row: chevron, title, trigger label right-aligned.
        if let Some(y) = self.screen_y(area, top) {
            let chevron = if expanded {
                self.icons.expanded()
            } else {
                self.icons.collapsed()
            };
            let trigger = if expanded {
                folio_core::EXPANDED_LABEL
            } else {
                folio_core::COLLAPSED_LABEL
            };

            let mut spans = vec![
                Span::styled(chevron, Style::default().fg(self.theme.secondary)),
                Span::raw(" "),
                Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(self.theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let padding = usize::from(area.width).saturating_sub(used + trigger.width());
            if padding > 0 {
                spans.push(Span::raw(" ".repeat(padding)));
                spans.push(Span::styled(trigger, Style::default().fg(self.theme.muted)));
            }

            let selected = self.cursor_is_at(block, top);
            self.draw_line(area, buf, y, &Line::from(spans), selected);
        }

        if !expanded {
            return;
        }

        // Body rows, clipped to the measured height.
        let avail = height.saturating_sub(1);
        let inner = usize::from(area.width)
            .saturating_sub(ACCORDION_INDENT)
            .max(1);
        let indent = " ".repeat(ACCORDION_INDENT);
        let mut row = 0;
        for (i, paragraph) in body.iter().enumerate() {
            if i > 0 {
                row += 1;
            }
            for wrapped in wrap(paragraph, inner) {
                if row >= avail {
                    return;
                }
                if let Some(y) = self.screen_y(area, top + 1 + row) {
                    let line = Line::from(Span::styled(
                        format!("{indent}{wrapped}"),
                        Style::default().fg(self.theme.subtext),
                    ));
                    buf.set_line(area.x, y, &line, area.width);
                }
                row += 1;
            }
        }
    }

    fn render_link(&self, area: Rect, buf: &mut Buffer, block: usize, top: usize, label: &str) {
        let Some(y) = self.screen_y(area, top) else {
            return;
        };
        let mut style = Style::default()
            .fg(self.theme.info)
            .add_modifier(Modifier::UNDERLINED);
        if self.ctx.flash_block == Some(block) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let line = Line::from(vec![
            Span::styled(self.icons.link(), Style::default().fg(self.theme.info)),
            Span::raw(" "),
            Span::styled(label.to_string(), style),
        ]);
        let selected = self.cursor_is_at(block, top);
        self.draw_line(area, buf, y, &line, selected);
    }

    fn render_entry(
        &self,
        area: Rect,
        buf: &mut Buffer,
        reveal_index: usize,
        top: usize,
        entry: &TimelineEntry,
    ) {
        let phase = self.ctx.reveal.phase(reveal_index);
        if phase == RevealPhase::Hidden {
            return;
        }

        // Mid-reveal entries slide up and fade from muted to full color.
        let (row, fade) = if phase == RevealPhase::Revealing {
            let progress = self.ctx.reveal.progress(reveal_index);
            let row = top + usize::from(slide_offset(progress));
            (row, Some(self.theme.fade(ease_out_cubic(progress))))
        } else {
            (top, None)
        };

        if let Some(y) = self.screen_y(area, row) {
            let line = Line::from(vec![
                Span::styled(
                    self.icons.bullet(),
                    Style::default().fg(fade.unwrap_or(self.theme.secondary)),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{:<5}", entry.time),
                    Style::default()
                        .fg(fade.unwrap_or(self.theme.primary))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    entry.title.clone(),
                    Style::default().fg(fade.unwrap_or(self.theme.text)),
                ),
            ]);
            buf.set_line(area.x, y, &line, area.width);
        }

        if let Some(detail) = &entry.detail {
            if let Some(y) = self.screen_y(area, row + 1) {
                // Detail sits under the title, past the bullet prefix.
                let indent = " ".repeat(TIMELINE_DETAIL_INDENT + 2);
                let line = Line::from(Span::styled(
                    format!("{indent}{detail}"),
                    Style::default().fg(fade.unwrap_or(self.theme.subtext)),
                ));
                buf.set_line(area.x, y, &line, area.width);
            }
        }
    }
}

impl Widget for PanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for placed in &self.ctx.layout.blocks {
            match &self.ctx.panel.blocks[placed.block] {
                Block::Paragraph { text } => self.render_paragraph(area, buf, placed.top, text),
                Block::Accordion { title, body } => {
                    let expanded = self
                        .ctx
                        .layout
                        .items
                        .iter()
                        .find_map(|item| match item.kind {
                            folio_core::ItemKind::AccordionHeader { accordion }
                                if item.block == placed.block =>
                            {
                                Some(accordion)
                            }
                            _ => None,
                        })
                        .and_then(|i| self.ctx.accordions.get(i))
                        .is_some_and(folio_core::Accordion::is_expanded);
                    self.render_accordion(
                        area,
                        buf,
                        placed.block,
                        placed.top,
                        placed.height,
                        title,
                        body,
                        expanded,
                    );
                }
                // Timeline rows are drawn from entry slots below.
                Block::Timeline { .. } => {}
                Block::Link { label, .. } => {
                    self.render_link(area, buf, placed.block, placed.top, label);
                }
            }
        }

        for (reveal_index, slot) in self.ctx.layout.entry_slots.iter().enumerate() {
            let Block::Timeline { entries } = &self.ctx.panel.blocks[slot.block] else {
                continue;
            };
            if let Some(entry) = entries.get(slot.entry) {
                self.render_entry(area, buf, reveal_index, slot.top, entry);
            }
        }
    }
}
