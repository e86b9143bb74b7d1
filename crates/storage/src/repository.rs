use async_trait::async_trait;
use kanji_core::model::{DatasetError, KanjiDataset, KanjiEntry};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("connection error: {0}")]
    Connection(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Source of kanji records.
#[async_trait]
pub trait KanjiRepository: Send + Sync {
    /// Load every entry, in dataset order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or decoded.
    async fn load_entries(&self) -> Result<Vec<KanjiEntry>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<Vec<KanjiEntry>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(entries: Vec<KanjiEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    /// Append an entry at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn push(&self, entry: KanjiEntry) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(entry);
        Ok(())
    }
}

#[async_trait]
impl KanjiRepository for InMemoryRepository {
    async fn load_entries(&self) -> Result<Vec<KanjiEntry>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Wraps the configured kanji source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kanji: Arc<dyn KanjiRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(entries: Vec<KanjiEntry>) -> Self {
        Self {
            kanji: Arc::new(InMemoryRepository::with_entries(entries)),
        }
    }

    /// Load the full dataset from the configured source.
    ///
    /// Entries without vocabulary examples are kept but reported; they can still
    /// produce reading questions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if loading fails or the source holds no entries.
    pub async fn load_dataset(&self) -> Result<KanjiDataset, StorageError> {
        let entries = self.kanji.load_entries().await?;
        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_well_formed() {
                warn!(index, kanji = %entry.character, "kanji entry has no examples");
            }
        }
        let dataset = KanjiDataset::new(entries)?;
        info!(entries = dataset.len(), "kanji dataset loaded");
        Ok(dataset)
    }
}
