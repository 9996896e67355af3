use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use super::ThemeMode;
use crate::console_warn;

/// Persists the chosen theme mode in browser local storage
#[derive(Clone, PartialEq, Debug)]
pub struct ThemeStorage {
    key: String,
}

impl ThemeStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn get_mode(&self) -> Result<ThemeMode, StorageError> {
        LocalStorage::get(&self.key)
    }

    pub fn store_mode(&self, mode: ThemeMode) -> Result<(), StorageError> {
        LocalStorage::set(&self.key, mode)
    }

    /// Stored mode, or `fallback` when nothing usable is stored
    pub fn load_or(&self, fallback: ThemeMode) -> ThemeMode {
        match self.get_mode() {
            Ok(mode) => mode,
            Err(StorageError::KeyNotFound(_)) => fallback,
            Err(e) => {
                console_warn!("[Theme] Could not read stored theme '{}': {}", self.key, e);
                fallback
            }
        }
    }

    pub fn save(&self, mode: ThemeMode) {
        if let Err(e) = self.store_mode(mode) {
            console_warn!("[Theme] Could not store theme '{}': {}", self.key, e);
        }
    }
}
