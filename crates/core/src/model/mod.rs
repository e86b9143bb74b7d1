mod ai_settings;
mod dataset;
mod kanji;
mod practice;
mod question;
mod sentence;

pub use ai_settings::{AiSettings, AiSettingsDraft, AiSettingsError};
pub use dataset::{DatasetError, KanjiDataset};
pub use kanji::{KanjiEntry, VocabExample};
pub use practice::{Difficulty, KanjiRange, PracticeSettings, PracticeSettingsDraft};
pub use question::{Question, QuestionError, QuestionKind};
pub use sentence::ExampleSentence;
