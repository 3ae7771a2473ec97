//! Whole-page interaction state.
//!
//! `PageState` owns the document plus every piece of per-panel state: scroll
//! position, cursor over interactive rows, accordion sections, reveal
//! animations and link flashes. All mutation goes through the operations
//! here so the side effects stay consistent: selecting a tab pulls focus
//! into the resolved panel, any scroll or layout change re-checks which
//! timeline entries are in view, and collapsing content clamps the scroll
//! back into range.
//!
//! Operations on a page with no active panel (an empty document, or a tab
//! whose target resolves to nothing) are no-ops rather than errors.

use crate::accordion::Accordion;
use crate::document::{Block, Document, Panel};
use crate::focus::{FocusManager, FocusZone};
use crate::gesture::SwipeDirection;
use crate::layout::{self, ItemKind, PanelLayout};
use crate::reveal::{RevealController, REVEAL_BOTTOM_MARGIN, REVEAL_VISIBLE_FRACTION};
use crate::shortcuts::shortcut_target;
use crate::tabs::TabStrip;

/// Rows moved per wheel notch or plain scroll step.
pub const SCROLL_STEP: usize = 3;

/// How long an activated link stays highlighted.
pub const LINK_FLASH_MS: u64 = 150;

/// Result of activating an interactive row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activated {
    /// An accordion was toggled; `expanded` is the new state.
    Accordion { expanded: bool },
    /// A link was activated; the URL is handed back for the caller to copy.
    Link { url: String },
}

/// Everything the renderer needs about the active panel.
pub struct PanelContext<'a> {
    /// Panel index in document order.
    pub index: usize,
    pub panel: &'a Panel,
    pub layout: PanelLayout,
    pub accordions: &'a [Accordion],
    pub reveal: &'a RevealController,
    /// First visible content row.
    pub scroll: usize,
    /// Cursor position within `layout.items`.
    pub cursor: Option<usize>,
    /// Block index of a link mid-flash.
    pub flash_block: Option<usize>,
}

#[derive(Debug, Clone)]
struct PanelState {
    scroll: usize,
    cursor: Option<usize>,
    accordions: Vec<Accordion>,
    reveal: RevealController,
    link_flash: Option<LinkFlash>,
}

#[derive(Debug, Clone, Copy)]
struct LinkFlash {
    block: usize,
    remaining_ms: u64,
}

impl PanelState {
    fn for_panel(panel: &Panel) -> Self {
        let accordion_count = panel
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Accordion { .. }))
            .count();
        let entry_count = panel
            .blocks
            .iter()
            .map(|b| match b {
                Block::Timeline { entries } => entries.len(),
                _ => 0,
            })
            .sum();
        Self {
            scroll: 0,
            cursor: None,
            accordions: vec![Accordion::new(); accordion_count],
            reveal: RevealController::new(entry_count),
            link_flash: None,
        }
    }
}

/// The page: document, tab strip, focus and per-panel state.
pub struct PageState {
    doc: Document,
    strip: TabStrip,
    focus: FocusManager,
    panels: Vec<PanelState>,
    width: usize,
    height: usize,
}

impl PageState {
    /// Build a page over `doc` with a content viewport of `width` by
    /// `height` cells. The first tab starts active without pulling focus
    /// into its panel.
    pub fn new(doc: Document, width: usize, height: usize) -> Self {
        let strip = TabStrip::from_document(&doc);
        let panels = doc.panels.iter().map(PanelState::for_panel).collect();
        Self {
            doc,
            strip,
            focus: FocusManager::new(),
            panels,
            width,
            height,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    /// Content viewport width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Content viewport height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the active panel, when the active button resolves.
    pub fn active_panel_index(&self) -> Option<usize> {
        self.strip.active_panel()
    }

    /// Accordion states of panel `index`, empty for an unknown index.
    pub fn accordions(&self, index: usize) -> &[Accordion] {
        self.panels.get(index).map_or(&[], |p| &p.accordions)
    }

    /// Render context for the active panel. `None` when nothing is active,
    /// which the caller renders as an empty page.
    pub fn active_context(&self) -> Option<PanelContext<'_>> {
        let index = self.active_panel_index()?;
        let state = &self.panels[index];
        Some(PanelContext {
            index,
            panel: &self.doc.panels[index],
            layout: self.layout_for(index),
            accordions: &state.accordions,
            reveal: &state.reveal,
            scroll: state.scroll,
            cursor: state.cursor,
            flash_block: state.link_flash.map(|f| f.block),
        })
    }

    // --- tab selection ---

    /// Activate the tab at `index`.
    pub fn select_tab(&mut self, index: usize) {
        if self.strip.select(index) {
            self.after_selection();
        }
    }

    /// Activate the tab whose target is `target`. Unknown targets are
    /// ignored.
    pub fn select_target(&mut self, target: &str) -> bool {
        if self.strip.select_target(target) {
            self.after_selection();
            true
        } else {
            false
        }
    }

    /// Activate the next tab, wrapping past the end.
    pub fn next_tab(&mut self) {
        if self.strip.next() {
            self.after_selection();
        }
    }

    /// Activate the previous tab, wrapping past the start.
    pub fn prev_tab(&mut self) {
        if self.strip.prev() {
            self.after_selection();
        }
    }

    /// Activate the first tab.
    pub fn first_tab(&mut self) {
        if self.strip.first() {
            self.after_selection();
        }
    }

    /// Activate the last tab.
    pub fn last_tab(&mut self) {
        if self.strip.last() {
            self.after_selection();
        }
    }

    /// Apply a swipe: leftward travel advances, rightward goes back.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.next_tab(),
            SwipeDirection::Right => self.prev_tab(),
        }
    }

    /// Handle a global Alt+digit shortcut. Returns whether a tab changed.
    pub fn shortcut(&mut self, digit: char) -> bool {
        let Some(target) = shortcut_target(digit) else {
            return false;
        };
        let selected = self.select_target(target);
        if !selected {
            tracing::debug!(%digit, target, "shortcut target not in document");
        }
        selected
    }

    fn after_selection(&mut self) {
        self.focus.on_selection(self.strip.active_panel().is_some());
        self.observe_active();
    }

    // --- focus ---

    pub fn focus_zone(&self) -> FocusZone {
        self.focus.zone()
    }

    pub fn toggle_focus(&mut self) {
        self.focus.toggle();
    }

    pub fn set_focus(&mut self, zone: FocusZone) {
        self.focus.set(zone);
    }

    // --- scrolling ---

    /// Scroll the active panel down by `rows`, clamped to the content end.
    pub fn scroll_down(&mut self, rows: usize) {
        let Some(index) = self.active_panel_index() else {
            return;
        };
        let max = self.max_scroll(index);
        let state = &mut self.panels[index];
        state.scroll = (state.scroll + rows).min(max);
        self.observe_active();
    }

    /// Scroll the active panel up by `rows`.
    pub fn scroll_up(&mut self, rows: usize) {
        let Some(index) = self.active_panel_index() else {
            return;
        };
        let state = &mut self.panels[index];
        state.scroll = state.scroll.saturating_sub(rows);
        self.observe_active();
    }

    pub fn scroll_to_top(&mut self) {
        let Some(index) = self.active_panel_index() else {
            return;
        };
        self.panels[index].scroll = 0;
        self.observe_active();
    }

    pub fn scroll_to_bottom(&mut self) {
        let Some(index) = self.active_panel_index() else {
            return;
        };
        self.panels[index].scroll = self.max_scroll(index);
        self.observe_active();
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height.saturating_sub(1).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height.saturating_sub(1).max(1));
    }

    // --- cursor over interactive rows ---

    /// Move the cursor to the next interactive row, scrolling it into view.
    /// Panels without interactive rows just scroll.
    pub fn cursor_next(&mut self) {
        let Some(index) = self.active_panel_index() else {
            return;
        };
        let layout = self.layout_for(index);
        if layout.items.is_empty() {
            self.scroll_down(SCROLL_STEP);
            return;
        }
        let state = &mut self.panels[index];
        state.cursor = Some(match state.cursor {
            None => 0,
            Some(c) => (c + 1).min(layout.items.len() - 1),
        });
        self.ensure_cursor_visible(index, &layout);
        self.observe_active();
    }

    /// Move the cursor to the previous interactive row.
    pub fn cursor_prev(&mut self) {
        let Some(index) = self.active_panel_index() else {
            return;
        };
        let layout = self.layout_for(index);
        if layout.items.is_empty() {
            self.scroll_up(SCROLL_STEP);
            return;
        }
        let state = &mut self.panels[index];
        state.cursor = Some(match state.cursor {
            None => 0,
            Some(c) => c.saturating_sub(1),
        });
        self.ensure_cursor_visible(index, &layout);
        self.observe_active();
    }

    /// Activate the row under the cursor.
    pub fn activate_cursor(&mut self) -> Option<Activated> {
        let index = self.active_panel_index()?;
        let cursor = self.panels[index].cursor?;
        self.activate_item(index, cursor)
    }

    /// Resolve a click on content row `row` of the active panel. Moves the
    /// cursor to the clicked row when it is interactive and activates it.
    pub fn click_row(&mut self, row: usize) -> Option<Activated> {
        let index = self.active_panel_index()?;
        self.focus.set(FocusZone::Panel);
        let layout = self.layout_for(index);
        let item_index = layout.item_at_row(row)?;
        self.panels[index].cursor = Some(item_index);
        self.activate_item(index, item_index)
    }

    fn activate_item(&mut self, panel: usize, item_index: usize) -> Option<Activated> {
        let layout = self.layout_for(panel);
        let item = *layout.items.get(item_index)?;
        match item.kind {
            ItemKind::AccordionHeader { accordion } => {
                let Block::Accordion { body, .. } = &self.doc.panels[panel].blocks[item.block]
                else {
                    return None;
                };
                let measured = layout::measure_body(body, self.width);
                let expanded = self.panels[panel].accordions[accordion].toggle(measured);
                self.clamp_scroll(panel);
                self.observe_active();
                Some(Activated::Accordion { expanded })
            }
            ItemKind::Link => {
                let Block::Link { url, .. } = &self.doc.panels[panel].blocks[item.block] else {
                    return None;
                };
                let url = url.clone();
                self.panels[panel].link_flash = Some(LinkFlash {
                    block: item.block,
                    remaining_ms: LINK_FLASH_MS,
                });
                Some(Activated::Link { url })
            }
        }
    }

    // --- bulk accordion operations ---

    /// Expand every accordion in the document, measuring bodies at the
    /// current width. Sections already open keep their state.
    pub fn expand_all(&mut self) {
        let width = self.width;
        for (panel, state) in self.doc.panels.iter().zip(self.panels.iter_mut()) {
            let mut accordion = 0;
            for block in &panel.blocks {
                if let Block::Accordion { body, .. } = block {
                    state.accordions[accordion].expand(layout::measure_body(body, width));
                    accordion += 1;
                }
            }
        }
        self.observe_active();
    }

    /// Collapse every accordion in the document.
    pub fn collapse_all(&mut self) {
        for state in &mut self.panels {
            for accordion in &mut state.accordions {
                accordion.collapse();
            }
        }
        for index in 0..self.panels.len() {
            self.clamp_scroll(index);
        }
        self.observe_active();
    }

    /// Get the page ready for printing: every accordion open. There is no
    /// matching restore; the page stays this way afterwards.
    pub fn prepare_print(&mut self) {
        tracing::info!("expanding all sections for print");
        self.expand_all();
    }

    // --- viewport ---

    /// Apply a new content viewport size. Expanded accordions are
    /// remeasured at the new width; stored heights are otherwise stale.
    pub fn on_resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        for (panel, state) in self.doc.panels.iter().zip(self.panels.iter_mut()) {
            let mut accordion = 0;
            for block in &panel.blocks {
                if let Block::Accordion { body, .. } = block {
                    state.accordions[accordion].remeasure(layout::measure_body(body, width));
                    accordion += 1;
                }
            }
        }
        for index in 0..self.panels.len() {
            self.clamp_scroll(index);
        }
        self.observe_active();
    }

    /// Turn reveal animation on or off. Off, entries jump straight to
    /// revealed the moment they are observed in view.
    pub fn set_animate(&mut self, animate: bool) {
        for state in &mut self.panels {
            state.reveal.set_instant(!animate);
        }
    }

    /// Advance animations: reveal clocks in every panel and any link flash.
    pub fn tick(&mut self, delta_ms: u64) {
        for state in &mut self.panels {
            state.reveal.tick(delta_ms);
            if let Some(flash) = &mut state.link_flash {
                flash.remaining_ms = flash.remaining_ms.saturating_sub(delta_ms);
                if flash.remaining_ms == 0 {
                    state.link_flash = None;
                }
            }
        }
        self.observe_active();
    }

    // --- internals ---

    fn layout_for(&self, index: usize) -> PanelLayout {
        layout::layout_panel(&self.doc.panels[index], &self.panels[index].accordions, self.width)
    }

    fn max_scroll(&self, index: usize) -> usize {
        self.layout_for(index).rows.saturating_sub(self.height)
    }

    fn clamp_scroll(&mut self, index: usize) {
        let max = self.max_scroll(index);
        let state = &mut self.panels[index];
        state.scroll = state.scroll.min(max);
    }

    fn ensure_cursor_visible(&mut self, index: usize, layout: &PanelLayout) {
        let state = &mut self.panels[index];
        let Some(cursor) = state.cursor else {
            return;
        };
        let Some(item) = layout.items.get(cursor) else {
            return;
        };
        if item.row < state.scroll {
            state.scroll = item.row;
        } else if item.row >= state.scroll + self.height {
            state.scroll = item.row + 1 - self.height;
        }
    }

    /// Check which timeline entries of the active panel are in view and
    /// start their reveals. The viewport is shortened at the bottom so
    /// entries fire a little after they clear the edge.
    fn observe_active(&mut self) {
        let Some(index) = self.active_panel_index() else {
            return;
        };
        let layout = self.layout_for(index);
        let state = &mut self.panels[index];
        let view_top = state.scroll;
        let view_bottom = state.scroll + self.height.saturating_sub(REVEAL_BOTTOM_MARGIN);
        let mut visible = Vec::new();
        for (entry_index, slot) in layout.entry_slots.iter().enumerate() {
            let top = slot.top.max(view_top);
            let bottom = (slot.top + slot.height).min(view_bottom);
            if bottom.saturating_sub(top) >= needed_rows(slot.height) {
                visible.push(entry_index);
            }
        }
        state.reveal.observe_visible(&visible);
    }
}

/// Rows of an entry that must be in view before it reveals.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn needed_rows(height: usize) -> usize {
    ((height as f32) * REVEAL_VISIBLE_FRACTION).ceil().max(1.0) as usize
}
