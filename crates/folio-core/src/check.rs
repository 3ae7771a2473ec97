//! Document lints.
//!
//! The viewer itself never rejects a document; a button with a dead target
//! simply blanks the page, an untargeted panel is unreachable, and a
//! missing shortcut target makes Alt+N inert. `check_document` reports
//! those states so authors find out before a reader does.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::document::Document;
use crate::shortcuts::SHORTCUT_TARGETS;

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Visibly broken for readers.
    Error,
    /// Content that cannot be reached or is ambiguous.
    Warning,
    /// Worth knowing, harmless.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// One lint finding.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// All findings for a document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
}

impl CheckReport {
    /// Whether any finding is an error.
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Error)
    }

    /// Whether there is nothing to report at all.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    fn push(&mut self, severity: Severity, message: String) {
        self.findings.push(Finding { severity, message });
    }
}

/// Lint a document.
pub fn check_document(doc: &Document) -> CheckReport {
    let mut report = CheckReport::default();

    for button in &doc.buttons {
        if doc.panel(&button.target).is_none() {
            report.push(
                Severity::Error,
                format!(
                    "button \"{}\" targets missing panel \"{}\"",
                    button.label, button.target
                ),
            );
        }
    }

    for panel in &doc.panels {
        if !doc.buttons.iter().any(|b| b.target == panel.id) {
            report.push(
                Severity::Warning,
                format!("panel \"{}\" is unreachable, no button targets it", panel.id),
            );
        }
    }

    let mut id_counts: HashMap<&str, usize> = HashMap::new();
    for panel in &doc.panels {
        *id_counts.entry(panel.id.as_str()).or_default() += 1;
    }
    for (index, panel) in doc.panels.iter().enumerate() {
        let duplicated = id_counts.get(panel.id.as_str()).copied().unwrap_or(0) > 1;
        // Report each duplicated id once, at its first occurrence.
        if duplicated && doc.panel_index(&panel.id) == Some(index) {
            report.push(
                Severity::Error,
                format!(
                    "duplicate panel id \"{}\", only the first is ever shown",
                    panel.id
                ),
            );
        }
    }

    let mut target_counts: HashMap<&str, usize> = HashMap::new();
    for button in &doc.buttons {
        *target_counts.entry(button.target.as_str()).or_default() += 1;
    }
    for (index, button) in doc.buttons.iter().enumerate() {
        let count = target_counts.get(button.target.as_str()).copied().unwrap_or(0);
        // Report each shared target once, at its first occurrence.
        if count > 1
            && doc.buttons.iter().position(|b| b.target == button.target) == Some(index)
        {
            report.push(
                Severity::Warning,
                format!("{count} buttons share the target \"{}\"", button.target),
            );
        }
    }

    for panel in &doc.panels {
        if panel.blocks.is_empty() {
            report.push(
                Severity::Info,
                format!("panel \"{}\" has no content", panel.id),
            );
        }
    }

    for (digit, target) in SHORTCUT_TARGETS.iter().enumerate() {
        if !doc.buttons.iter().any(|b| b.target == *target) {
            report.push(
                Severity::Info,
                format!("Alt+{} is inert, no tab targets \"{target}\"", digit + 1),
            );
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Panel, TabButton};

    fn doc(buttons: &[(&str, &str)], panels: &[&str]) -> Document {
        Document {
            title: "test".into(),
            buttons: buttons
                .iter()
                .map(|(label, target)| TabButton {
                    target: (*target).into(),
                    label: (*label).into(),
                })
                .collect(),
            panels: panels
                .iter()
                .map(|id| Panel {
                    id: (*id).into(),
                    date: None,
                    blocks: Vec::new(),
                })
                .collect(),
        }
    }

    fn messages(report: &CheckReport, severity: Severity) -> Vec<&str> {
        report
            .findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.message.as_str())
            .collect()
    }

    #[test]
    fn test_sample_document_has_no_errors() {
        let report = check_document(&crate::document::Document::sample());
        assert!(!report.has_errors());
        assert!(report.is_clean());
    }

    #[test]
    fn test_dangling_target_is_an_error() {
        let d = doc(&[("Ghost", "ghost")], &[]);
        let report = check_document(&d);
        assert!(report.has_errors());
        let errors = messages(&report, Severity::Error);
        assert!(errors[0].contains("missing panel \"ghost\""));
    }

    #[test]
    fn test_unreachable_panel_is_a_warning() {
        let d = doc(&[("Day 1", "day1")], &["day1", "orphan"]);
        let report = check_document(&d);
        assert!(!report.has_errors());
        let warnings = messages(&report, Severity::Warning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("\"orphan\" is unreachable"));
    }

    #[test]
    fn test_duplicate_panel_id_reported_once() {
        let d = doc(&[("Day 1", "day1")], &["day1", "day1"]);
        let report = check_document(&d);
        let errors = messages(&report, Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duplicate panel id \"day1\""));
    }

    #[test]
    fn test_shared_button_target_is_a_warning() {
        let d = doc(&[("A", "day1"), ("B", "day1")], &["day1"]);
        let report = check_document(&d);
        let warnings = messages(&report, Severity::Warning);
        assert!(warnings.iter().any(|m| m.contains("share the target")));
    }

    #[test]
    fn test_shared_targets_report_in_button_order() {
        let d = doc(
            &[("A", "day2"), ("B", "day2"), ("C", "day1"), ("D", "day1")],
            &["day1", "day2"],
        );
        let report = check_document(&d);
        let warnings = messages(&report, Severity::Warning);
        // Both targets are shared; each is reported once, in the order the
        // buttons appear.
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("\"day2\""));
        assert!(warnings[1].contains("\"day1\""));
    }

    #[test]
    fn test_empty_panel_is_informational() {
        let d = doc(&[("Day 1", "day1")], &["day1"]);
        let report = check_document(&d);
        let infos = messages(&report, Severity::Info);
        assert!(infos.iter().any(|m| m.contains("has no content")));
    }

    #[test]
    fn test_inert_shortcuts_are_reported() {
        let d = doc(&[("Intro", "intro")], &["intro"]);
        let report = check_document(&d);
        let infos = messages(&report, Severity::Info);
        assert!(infos.iter().any(|m| m.contains("Alt+1 is inert")));
        assert!(infos.iter().any(|m| m.contains("Alt+3 is inert")));
    }
}
