//! View model for the stored-data panel shown on page load.

use std::rc::Rc;

use crate::config::FormConfig;
use crate::field::FieldId;
use crate::snapshot::{FormSnapshot, SnapshotStore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineLabel {
    /// Known field, rendered bold.
    Known(&'static str),
    /// Unknown key, rendered plain.
    Raw(String),
}

impl LineLabel {
    pub fn text(&self) -> &str {
        match self {
            Self::Known(label) => label,
            Self::Raw(key) => key,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredLine {
    pub label: LineLabel,
    pub value: String,
}

impl StoredLine {
    /// `"Label: value"` as plain text.
    pub fn text(&self) -> String {
        format!("{}: {}", self.label.text(), self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredView {
    Empty { message: String },
    Stored { heading: String, lines: Vec<StoredLine> },
}

pub fn render_snapshot(snapshot: Option<&FormSnapshot>, config: &FormConfig) -> StoredView {
    let Some(snapshot) = snapshot else {
        return StoredView::Empty {
            message: config.empty_storage_message.clone(),
        };
    };
    let lines = snapshot
        .entries()
        .map(|(key, value)| StoredLine {
            label: match FieldId::from_key(key) {
                Some(field) => LineLabel::Known(field.label()),
                None => LineLabel::Raw(key.to_string()),
            },
            value: value.to_string(),
        })
        .collect();
    StoredView::Stored {
        heading: config.stored_heading.clone(),
        lines,
    }
}

/// Reads the persisted snapshot; never writes.
#[derive(Clone)]
pub struct StorageRenderer {
    store: Rc<dyn SnapshotStore>,
    config: Rc<FormConfig>,
}

impl StorageRenderer {
    pub fn new(store: Rc<dyn SnapshotStore>, config: Rc<FormConfig>) -> Self {
        Self { store, config }
    }

    pub fn render(&self) -> StoredView {
        render_snapshot(self.store.load().as_ref(), &self.config)
    }
}
