use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use kanji_core::model::KanjiEntry;

use crate::repository::{KanjiRepository, Storage, StorageError};

/// The N5 sample dataset compiled into the binary.
const BUNDLED_N5: &str = include_str!("../../data/n5_kanji.json");

/// Parse a JSON array of kanji records.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the document is not a valid record array.
pub fn parse_entries(json: &str) -> Result<Vec<KanjiEntry>, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads the dataset from a JSON file on every load.
#[derive(Clone, Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl KanjiRepository for JsonFileRepository {
    async fn load_entries(&self) -> Result<Vec<KanjiEntry>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.display().to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        parse_entries(&raw)
    }
}

/// Serves the dataset compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledRepository;

#[async_trait]
impl KanjiRepository for BundledRepository {
    async fn load_entries(&self) -> Result<Vec<KanjiEntry>, StorageError> {
        parse_entries(BUNDLED_N5)
    }
}

impl Storage {
    /// Build a `Storage` reading from a JSON file.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            kanji: Arc::new(JsonFileRepository::new(path)),
        }
    }

    /// Build a `Storage` serving the bundled N5 dataset.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            kanji: Arc::new(BundledRepository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses_and_is_well_formed() {
        let entries = parse_entries(BUNDLED_N5).unwrap();
        assert!(entries.len() >= 20);
        assert!(entries.iter().all(KanjiEntry::is_well_formed));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = parse_entries("[{\"kanji\": 1}]").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
