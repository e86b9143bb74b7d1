mod generator;
mod progress;
mod service;
mod session;

// Public API of the practice subsystem.
pub use crate::error::PracticeError;
pub use generator::{GenerationStats, GeneratorConfig, QuestionGenerator};
pub use progress::QuizProgress;
pub use service::PracticeService;
pub use session::{AnswerOutcome, QuizSession, QuizState};
