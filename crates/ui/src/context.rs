use std::sync::Arc;

use dioxus::prelude::*;
use kanji_core::model::KanjiDataset;
use services::{PracticeService, SentenceService};

pub trait UiApp: Send + Sync {
    fn dataset(&self) -> Arc<KanjiDataset>;
    fn practice(&self) -> Arc<PracticeService>;
    fn sentences(&self) -> Arc<SentenceService>;
}

#[derive(Clone)]
pub struct AppContext {
    dataset: Arc<KanjiDataset>,
    practice: Arc<PracticeService>,
    sentences: Arc<SentenceService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            dataset: app.dataset(),
            practice: app.practice(),
            sentences: app.sentences(),
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Global "Hide Japanese" toggle shared by the home screen and every flashcard.
#[derive(Clone, Copy, PartialEq)]
pub struct HideVocab(pub Signal<bool>);

impl HideVocab {
    #[must_use]
    pub fn get(self) -> bool {
        *self.0.read()
    }

    pub fn toggle(self) {
        let mut signal = self.0;
        let hidden = *signal.read();
        signal.set(!hidden);
    }
}
