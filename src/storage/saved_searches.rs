// src/storage/saved_searches.rs
use crate::domain::SearchCriteria;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("saved searches file: {0}")]
    Io(#[from] std::io::Error),

    #[error("saved searches lock poisoned")]
    Poisoned,
}

/// One alert subscription: `email,city,category,type,maxPrice`.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSearch {
    pub email: String,
    pub criteria: SearchCriteria,
}

impl SavedSearch {
    pub fn new(email: impl Into<String>, criteria: &SearchCriteria) -> Self {
        Self {
            email: email.into(),
            criteria: criteria.clone(),
        }
    }

    pub fn line(&self) -> String {
        format!(
            "{},{},{},{},{:?}",
            self.email,
            self.criteria.city.trim(),
            self.criteria.category,
            self.criteria.property_type,
            self.criteria.max_price
        )
    }
}

/// Append-only file of saved searches. Nothing reads it back.
pub struct SavedSearchLog {
    path: PathBuf,
    // Serializes appends from concurrent workers.
    lock: Mutex<()>,
}

impl SavedSearchLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, search: &SavedSearch) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", search.line())?;

        info!(path = %self.path.display(), city = %search.criteria.city, "Saved search");
        Ok(())
    }
}
