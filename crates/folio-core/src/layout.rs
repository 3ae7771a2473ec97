//! Panel geometry in content rows.
//!
//! Everything that needs to agree on where a block sits goes through this
//! module: the renderer draws from it, clicks are resolved against it, and
//! reveal visibility is judged with it. Heights depend on the content width
//! (paragraphs and accordion bodies wrap) and on accordion state (collapsed
//! bodies occupy no rows).
//!
//! Layout rules: blocks stack top to bottom with one blank row between
//! blocks. A paragraph is its wrapped line count. An accordion is a single
//! header row plus its stored body height. A timeline is its entries packed
//! tightly, one row for the time and title and one more when the entry has a
//! detail line. A link is one row.

use textwrap::wrap;

use crate::accordion::Accordion;
use crate::document::{Block, Panel};

/// Columns accordion bodies are indented by.
pub const ACCORDION_INDENT: usize = 2;

/// Columns a timeline detail line is indented by, aligning it under the
/// entry title after the time column.
pub const TIMELINE_DETAIL_INDENT: usize = 7;

/// Computed layout of one panel at a given width.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Total content rows.
    pub rows: usize,
    /// Per-block placement, in block order.
    pub blocks: Vec<BlockLayout>,
    /// Interactive rows (accordion headers and links), top to bottom.
    pub items: Vec<Item>,
    /// Timeline entry slots across all timeline blocks, top to bottom.
    /// Position in this list is the entry's reveal index.
    pub entry_slots: Vec<EntrySlot>,
}

/// Placement of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// Index into `panel.blocks`.
    pub block: usize,
    /// First content row of the block.
    pub top: usize,
    /// Rows occupied.
    pub height: usize,
}

/// Placement of one timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySlot {
    /// Index of the owning timeline block.
    pub block: usize,
    /// Entry index within that block.
    pub entry: usize,
    /// First content row of the entry.
    pub top: usize,
    /// Rows occupied (1, or 2 with a detail line).
    pub height: usize,
}

/// An interactive row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Index into `panel.blocks`.
    pub block: usize,
    /// Content row that reacts to activation.
    pub row: usize,
    pub kind: ItemKind,
}

/// What an interactive row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Accordion header; `accordion` indexes the panel's accordion states.
    AccordionHeader { accordion: usize },
    /// Link row.
    Link,
}

impl PanelLayout {
    /// Index into `items` of the interactive row at `row`, if any.
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        self.items.iter().position(|item| item.row == row)
    }
}

/// Wrapped line count of `text` at `width` columns.
pub fn wrap_count(text: &str, width: usize) -> usize {
    wrap(text, width.max(1)).len()
}

/// Rows an accordion body occupies at `width` columns of content, including
/// the blank row between body paragraphs. This is the measurement handed to
/// [`Accordion::expand`].
pub fn measure_body(body: &[String], width: usize) -> usize {
    let inner = width.saturating_sub(ACCORDION_INDENT);
    let lines: usize = body.iter().map(|p| wrap_count(p, inner)).sum();
    lines + body.len().saturating_sub(1)
}

/// Lay out `panel` at `width` columns, using the current accordion states
/// for body heights.
pub fn layout_panel(panel: &Panel, accordions: &[Accordion], width: usize) -> PanelLayout {
    let mut y = 0;
    let mut blocks = Vec::with_capacity(panel.blocks.len());
    let mut items = Vec::new();
    let mut entry_slots = Vec::new();
    let mut accordion_index = 0;

    for (block_index, block) in panel.blocks.iter().enumerate() {
        if block_index > 0 {
            y += 1;
        }
        let top = y;
        let height = match block {
            Block::Paragraph { text } => wrap_count(text, width),
            Block::Accordion { .. } => {
                let body_rows = accordions
                    .get(accordion_index)
                    .map_or(0, Accordion::content_height);
                items.push(Item {
                    block: block_index,
                    row: top,
                    kind: ItemKind::AccordionHeader {
                        accordion: accordion_index,
                    },
                });
                accordion_index += 1;
                1 + body_rows
            }
            Block::Timeline { entries } => {
                let mut rows = 0;
                for (entry_index, entry) in entries.iter().enumerate() {
                    let entry_height = if entry.detail.is_some() { 2 } else { 1 };
                    entry_slots.push(EntrySlot {
                        block: block_index,
                        entry: entry_index,
                        top: top + rows,
                        height: entry_height,
                    });
                    rows += entry_height;
                }
                rows
            }
            Block::Link { .. } => {
                items.push(Item {
                    block: block_index,
                    row: top,
                    kind: ItemKind::Link,
                });
                1
            }
        };
        blocks.push(BlockLayout {
            block: block_index,
            top,
            height,
        });
        y += height;
    }

    PanelLayout {
        rows: y,
        blocks,
        items,
        entry_slots,
    }
}
