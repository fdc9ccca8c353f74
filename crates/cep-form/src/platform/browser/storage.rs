//! `localStorage` persistence for the form snapshot.

use zoon::local_storage;

use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::StorageError;
use crate::snapshot::{FormSnapshot, SnapshotStore};

/// Keeps the last snapshot as JSON under a single `localStorage` key.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SnapshotStore for LocalStorageStore {
    fn save(&self, snapshot: &FormSnapshot) -> Result<(), StorageError> {
        local_storage()
            .insert(&self.key, snapshot)
            .map_err(|error| StorageError::Backend(format!("{error:?}")))
    }

    fn load(&self) -> Option<FormSnapshot> {
        match local_storage().get::<FormSnapshot>(&self.key)? {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                log::warn!("Ignoring unreadable form snapshot under '{}': {error:?}", self.key);
                None
            }
        }
    }
}
