//! Document model for the folio viewer.
//!
//! A folio document is a titled set of tab buttons and panels. Buttons name
//! the panel they activate by id; panels carry the content blocks. The two
//! lists are kept separate because a button may target a panel that does not
//! exist, and the viewer has to cope with that rather than assume the
//! document is well formed (see `check` for the lint that reports it).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete folio document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Title shown in the page header.
    pub title: String,

    /// Tab buttons in display order.
    #[serde(default)]
    pub buttons: Vec<TabButton>,

    /// Panels in display order.
    #[serde(default)]
    pub panels: Vec<Panel>,
}

/// A tab button referencing a panel by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabButton {
    /// Id of the panel this button activates.
    pub target: String,

    /// Button label.
    pub label: String,
}

/// A content panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    /// Panel id, matched against button targets.
    pub id: String,

    /// Optional calendar date shown in the panel header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Content blocks in display order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A content block within a panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Plain text, wrapped to the panel width.
    Paragraph {
        text: String,
    },

    /// Collapsible section with a header row and a body shown when expanded.
    Accordion {
        title: String,
        #[serde(default)]
        body: Vec<String>,
    },

    /// Sequence of timed entries, revealed one by one as they scroll into
    /// view.
    Timeline {
        #[serde(default)]
        entries: Vec<TimelineEntry>,
    },

    /// External link. Activation copies the URL rather than opening it.
    Link {
        label: String,
        url: String,
    },
}

/// A single timeline entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Display time, free form (e.g. "09:30").
    pub time: String,

    /// Entry title.
    pub title: String,

    /// Optional detail line below the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Document {
    /// Load a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(DocumentError::Io)?;
        serde_json::from_str(&content).map_err(DocumentError::Parse)
    }

    /// Save the document to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let content = serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DocumentError::Io)?;
        }
        std::fs::write(path, content).map_err(DocumentError::Io)
    }

    /// Look up a panel by id.
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Index of a panel by id.
    pub fn panel_index(&self, id: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }

    /// Index of a button by target.
    pub fn button_index(&self, target: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.target == target)
    }

    /// A three-day sample itinerary, used by `folio init` and by tests.
    pub fn sample() -> Self {
        Self {
            title: "Lisbon Long Weekend".into(),
            buttons: vec![
                TabButton {
                    target: "day1".into(),
                    label: "Day 1".into(),
                },
                TabButton {
                    target: "day2".into(),
                    label: "Day 2".into(),
                },
                TabButton {
                    target: "day3".into(),
                    label: "Day 3".into(),
                },
            ],
            panels: vec![
                Panel {
                    id: "day1".into(),
                    date: NaiveDate::from_ymd_opt(2026, 9, 18),
                    blocks: vec![
                        Block::Paragraph {
                            text: "Arrival day. Land mid-morning, drop bags at the hotel, \
                                   then ease into the city on foot."
                                .into(),
                        },
                        Block::Timeline {
                            entries: vec![
                                TimelineEntry {
                                    time: "10:40".into(),
                                    title: "Arrive LIS".into(),
                                    detail: Some("Metro red line to Saldanha, change once".into()),
                                },
                                TimelineEntry {
                                    time: "12:30".into(),
                                    title: "Check in, Hotel Avenida".into(),
                                    detail: None,
                                },
                                TimelineEntry {
                                    time: "14:00".into(),
                                    title: "Lunch in Baixa".into(),
                                    detail: Some("Walk down Rua Augusta toward the arch".into()),
                                },
                                TimelineEntry {
                                    time: "17:00".into(),
                                    title: "Miradouro at sunset".into(),
                                    detail: Some("Santa Catarina viewpoint".into()),
                                },
                            ],
                        },
                        Block::Accordion {
                            title: "Transport notes".into(),
                            body: vec![
                                "Buy a Viva Viagem card at the airport machine; load it with \
                                 zapping credit rather than single tickets."
                                    .into(),
                                "The 28 tram is scenic but packed after 10:00. Ride it early \
                                 or late."
                                    .into(),
                            ],
                        },
                        Block::Link {
                            label: "Map: airport to hotel".into(),
                            url: "https://maps.example.com/r/lis-avenida".into(),
                        },
                    ],
                },
                Panel {
                    id: "day2".into(),
                    date: NaiveDate::from_ymd_opt(2026, 9, 19),
                    blocks: vec![
                        Block::Paragraph {
                            text: "Full day: Belem in the morning, Alfama after lunch.".into(),
                        },
                        Block::Timeline {
                            entries: vec![
                                TimelineEntry {
                                    time: "09:00".into(),
                                    title: "Tram 15E to Belem".into(),
                                    detail: None,
                                },
                                TimelineEntry {
                                    time: "09:45".into(),
                                    title: "Jeronimos Monastery".into(),
                                    detail: Some("Pre-booked tickets, skip the line".into()),
                                },
                                TimelineEntry {
                                    time: "11:30".into(),
                                    title: "Pasteis de Belem".into(),
                                    detail: Some("Takeaway queue moves faster".into()),
                                },
                                TimelineEntry {
                                    time: "15:00".into(),
                                    title: "Alfama wander".into(),
                                    detail: Some("Castle last entry 17:30".into()),
                                },
                            ],
                        },
                        Block::Accordion {
                            title: "Booking references".into(),
                            body: vec![
                                "Monastery: JER-20260919-4412, two adults.".into(),
                                "Castle: no booking needed, cash desk only.".into(),
                            ],
                        },
                        Block::Accordion {
                            title: "Rain plan".into(),
                            body: vec![
                                "Swap Alfama for the Gulbenkian museum; closes 18:00, \
                                 closed Tuesdays."
                                    .into(),
                            ],
                        },
                        Block::Link {
                            label: "Map: Belem walking loop".into(),
                            url: "https://maps.example.com/r/belem-loop".into(),
                        },
                    ],
                },
                Panel {
                    id: "day3".into(),
                    date: NaiveDate::from_ymd_opt(2026, 9, 20),
                    blocks: vec![
                        Block::Paragraph {
                            text: "Departure day. Late flight, so the morning is free.".into(),
                        },
                        Block::Timeline {
                            entries: vec![
                                TimelineEntry {
                                    time: "10:00".into(),
                                    title: "LX Factory browse".into(),
                                    detail: None,
                                },
                                TimelineEntry {
                                    time: "13:00".into(),
                                    title: "Long lunch, Time Out Market".into(),
                                    detail: None,
                                },
                                TimelineEntry {
                                    time: "16:30".into(),
                                    title: "Collect bags, metro to LIS".into(),
                                    detail: Some("Allow 50 minutes door to gate".into()),
                                },
                                TimelineEntry {
                                    time: "19:15".into(),
                                    title: "Depart LIS".into(),
                                    detail: None,
                                },
                            ],
                        },
                        Block::Accordion {
                            title: "Packing checklist".into(),
                            body: vec![
                                "Chargers from the bedside socket.".into(),
                                "Pastries survive cabin baggage if boxed.".into(),
                            ],
                        },
                    ],
                },
            ],
        }
    }
}

/// Errors that can occur when working with documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error reading or writing the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing document JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing the document to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_buttons_match_panels() {
        let doc = Document::sample();
        assert_eq!(doc.buttons.len(), 3);
        for button in &doc.buttons {
            assert!(doc.panel(&button.target).is_some());
        }
    }

    #[test]
    fn test_panel_lookup() {
        let doc = Document::sample();
        assert_eq!(doc.panel_index("day2"), Some(1));
        assert!(doc.panel("day4").is_none());
        assert_eq!(doc.button_index("day3"), Some(2));
    }

    #[test]
    fn test_document_round_trip() {
        let doc = Document::sample();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, doc.title);
        assert_eq!(parsed.panels.len(), doc.panels.len());
        assert_eq!(parsed.buttons, doc.buttons);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trip.json");
        let doc = Document::sample();
        doc.save(&path).unwrap();
        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.title, doc.title);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{"title": "Empty"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert!(doc.buttons.is_empty());
        assert!(doc.panels.is_empty());
    }

    #[test]
    fn test_block_tagging() {
        let json = r#"{"kind": "accordion", "title": "Notes", "body": ["a"]}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert!(matches!(block, Block::Accordion { .. }));

        let json = r#"{"kind": "link", "label": "Map", "url": "https://example.com"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert!(matches!(block, Block::Link { .. }));
    }
}
