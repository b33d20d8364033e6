//! Report modal content store.
//!
//! Holds which report the UI was asked to show, decoupled from whatever
//! component ends up rendering it.

use serde::{Deserialize, Serialize};

/// The report a modal should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ReportKind {
    /// Financial detail for a canonical month name (or "Atual").
    Financial { month: String },
    /// Legal/contract status summary.
    Legal,
}

/// Content of the data modal: a title and the requested report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContent {
    pub title: String,
    pub kind: ReportKind,
}

impl ReportContent {
    /// Financial report content for a month.
    pub fn financial(title: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ReportKind::Financial {
                month: month.into(),
            },
        }
    }

    /// Legal summary content.
    pub fn legal(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ReportKind::Legal,
        }
    }
}

/// At most one report modal is live at a time; opening a new one replaces
/// the previous content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalStore {
    content: Option<ReportContent>,
}

impl ModalStore {
    /// Creates an empty store (no modal open).
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a modal with the given content, replacing any live one.
    pub fn open(&mut self, content: ReportContent) {
        self.content = Some(content);
    }

    /// Closes the modal, discarding its content.
    pub fn close(&mut self) {
        self.content = None;
    }

    /// Returns true if a modal is currently open.
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// The live modal content, if any.
    pub fn content(&self) -> Option<&ReportContent> {
        self.content.as_ref()
    }
}
