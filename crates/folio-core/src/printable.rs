//! Plain text rendering of the whole document, used for printing and
//! export.
//!
//! Every panel is rendered in order, not just the active one. Accordion
//! bodies appear only for expanded sections, so callers wanting the full
//! document run [`PageState::prepare_print`] first. Reveal state is
//! ignored; a printout always carries every timeline entry.

use textwrap::wrap;

use crate::document::{Block, Document, Panel};
use crate::layout::TIMELINE_DETAIL_INDENT;
use crate::page::PageState;

/// Column the printable rendering wraps at.
pub const PRINT_WIDTH: usize = 72;

/// Render the page as plain text.
pub fn render_printable(page: &PageState) -> String {
    let doc = page.document();
    let mut lines: Vec<String> = Vec::new();

    lines.push(doc.title.clone());
    lines.push("=".repeat(doc.title.chars().count()));

    for (panel_index, panel) in doc.panels.iter().enumerate() {
        lines.push(String::new());
        let heading = panel_heading(doc, panel);
        lines.push(heading.clone());
        lines.push("-".repeat(heading.chars().count()));

        let mut accordion = 0;
        for block in &panel.blocks {
            lines.push(String::new());
            match block {
                Block::Paragraph { text } => {
                    for line in wrap(text, PRINT_WIDTH) {
                        lines.push(line.into_owned());
                    }
                }
                Block::Accordion { title, body } => {
                    lines.push(title.clone());
                    let expanded = page
                        .accordions(panel_index)
                        .get(accordion)
                        .is_some_and(|a| a.is_expanded());
                    accordion += 1;
                    if expanded {
                        for (para_index, para) in body.iter().enumerate() {
                            if para_index > 0 {
                                lines.push(String::new());
                            }
                            for line in wrap(para, PRINT_WIDTH.saturating_sub(2)) {
                                lines.push(format!("  {line}"));
                            }
                        }
                    }
                }
                Block::Timeline { entries } => {
                    for entry in entries {
                        lines.push(format!("{:<5}  {}", entry.time, entry.title));
                        if let Some(detail) = &entry.detail {
                            lines.push(format!(
                                "{}{detail}",
                                " ".repeat(TIMELINE_DETAIL_INDENT)
                            ));
                        }
                    }
                }
                Block::Link { label, url } => {
                    lines.push(format!("{label} <{url}>"));
                }
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Heading for a panel: the label of the button targeting it, falling back
/// to the panel id, with the date appended when present.
fn panel_heading(doc: &Document, panel: &Panel) -> String {
    let label = doc
        .buttons
        .iter()
        .find(|b| b.target == panel.id)
        .map_or_else(|| panel.id.clone(), |b| b.label.clone());
    match panel.date {
        Some(date) => format!("{label} ({})", date.format("%a %d %b %Y")),
        None => label,
    }
}
