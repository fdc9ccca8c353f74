//! Persisted copy of the last submitted form.

use std::cell::RefCell;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::field::FieldId;

/// Field values captured at submit time, keyed by field key.
///
/// Keys keep their insertion order so stored data renders in form order.
/// Values are the displayed strings (masked phone, hyphenated CEP).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    entries: IndexMap<String, String>,
}

impl FormSnapshot {
    pub fn from_values(values: impl IntoIterator<Item = (FieldId, String)>) -> Self {
        Self {
            entries: values
                .into_iter()
                .map(|(field, value)| (field.key().to_string(), value))
                .collect(),
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.get_key(field.key())
    }

    pub fn get_key(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every form field has a key.
    pub fn is_complete(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.entries.contains_key(field.key()))
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Single-slot snapshot persistence. Each save overwrites the previous one.
pub trait SnapshotStore {
    fn save(&self, snapshot: &FormSnapshot) -> Result<(), StorageError>;

    /// `None` when nothing was stored or the stored value is unreadable.
    fn load(&self) -> Option<FormSnapshot>;
}

/// In-memory store holding the serialized JSON, like a string-only
/// key-value facility would.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: RefCell<Option<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-serialized content as-is, e.g. data written by another
    /// version of the page.
    pub fn with_raw(json: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(json.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, snapshot: &FormSnapshot) -> Result<(), StorageError> {
        let json = snapshot.to_json()?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn load(&self) -> Option<FormSnapshot> {
        let json = self.slot.borrow().clone()?;
        match FormSnapshot::from_json(&json) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                log::warn!("Ignoring unreadable form snapshot: {error}");
                None
            }
        }
    }
}
