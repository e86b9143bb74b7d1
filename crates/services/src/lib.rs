#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod practice;
pub mod sentence_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, PracticeError, SentenceError};
pub use practice::{
    AnswerOutcome, GenerationStats, GeneratorConfig, PracticeService, QuestionGenerator,
    QuizProgress, QuizSession, QuizState,
};
pub use sentence_service::{SentenceConfig, SentenceService, shuffle_sentences};
