use std::sync::Arc;

use kanji_core::model::KanjiDataset;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::practice::PracticeService;
use crate::sentence_service::SentenceService;

/// Assembles app-facing services around a loaded dataset.
#[derive(Clone)]
pub struct AppServices {
    dataset: Arc<KanjiDataset>,
    practice: Arc<PracticeService>,
    sentences: Arc<SentenceService>,
}

impl AppServices {
    /// Load the dataset from `storage` and build services over it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the dataset cannot be loaded.
    pub async fn load(
        storage: &Storage,
        sentences: SentenceService,
    ) -> Result<Self, AppServicesError> {
        let dataset = Arc::new(storage.load_dataset().await?);
        Ok(Self::new(dataset, sentences))
    }

    #[must_use]
    pub fn new(dataset: Arc<KanjiDataset>, sentences: SentenceService) -> Self {
        let practice = Arc::new(PracticeService::new(Arc::clone(&dataset)));
        Self {
            dataset,
            practice,
            sentences: Arc::new(sentences),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<KanjiDataset> {
        Arc::clone(&self.dataset)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn sentences(&self) -> Arc<SentenceService> {
        Arc::clone(&self.sentences)
    }
}
