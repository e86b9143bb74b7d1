use std::sync::Arc;

use rand::Rng;
use tracing::info;

use kanji_core::model::{KanjiDataset, PracticeSettings, PracticeSettingsDraft};

use super::generator::{GeneratorConfig, QuestionGenerator};
use super::session::QuizSession;
use crate::error::PracticeError;

/// Starts practice quizzes over the shared dataset.
#[derive(Debug, Clone)]
pub struct PracticeService {
    dataset: Arc<KanjiDataset>,
    config: GeneratorConfig,
}

impl PracticeService {
    #[must_use]
    pub fn new(dataset: Arc<KanjiDataset>) -> Self {
        Self {
            dataset,
            config: GeneratorConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<KanjiDataset> {
        Arc::clone(&self.dataset)
    }

    #[must_use]
    pub fn kanji_count(&self) -> usize {
        self.dataset.len()
    }

    /// Default form state: Easy over the whole dataset.
    #[must_use]
    pub fn settings_draft(&self) -> PracticeSettingsDraft {
        PracticeSettingsDraft::new(self.dataset.len())
    }

    /// Generate questions with the thread RNG and start a quiz.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError` if the range is invalid or no question could be built.
    pub fn start_quiz(&self, settings: &PracticeSettings) -> Result<QuizSession, PracticeError> {
        self.start_quiz_with_rng(settings, &mut rand::rng())
    }

    /// Same as [`PracticeService::start_quiz`] with an injected RNG.
    ///
    /// # Errors
    ///
    /// See [`PracticeService::start_quiz`].
    pub fn start_quiz_with_rng<R: Rng + ?Sized>(
        &self,
        settings: &PracticeSettings,
        rng: &mut R,
    ) -> Result<QuizSession, PracticeError> {
        let generator = QuestionGenerator::new(Arc::clone(&self.dataset)).with_config(self.config);
        let (questions, stats) = generator.generate_with_stats(settings, rng)?;
        info!(
            difficulty = %settings.difficulty,
            start = settings.range.start,
            end = settings.range.end,
            considered = stats.considered,
            skipped = stats.skipped_unmet,
            dropped = stats.dropped_underfilled,
            questions = questions.len(),
            "starting practice quiz"
        );
        QuizSession::start(questions)
    }
}
