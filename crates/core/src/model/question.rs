use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("correct answer {0:?} is not among the options")]
    AnswerNotInOptions(String),

    #[error("duplicate option {0:?}")]
    DuplicateOption(String),

    #[error("question text cannot be empty")]
    EmptyText,
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// What a question asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    KunReading,
    OnReading,
    EnglishMeaning,
    CompoundReading,
    CompoundMeaning,
}

impl QuestionKind {
    /// Kinds available to every entry regardless of difficulty.
    pub const BASIC: [QuestionKind; 3] = [
        QuestionKind::KunReading,
        QuestionKind::OnReading,
        QuestionKind::EnglishMeaning,
    ];

    /// Kinds unlocked at Medium and Hard for entries with several examples.
    pub const COMPOUND: [QuestionKind; 2] =
        [QuestionKind::CompoundReading, QuestionKind::CompoundMeaning];

    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            QuestionKind::KunReading => "What is the Kun'yomi reading?",
            QuestionKind::OnReading => "What is the On'yomi reading?",
            QuestionKind::EnglishMeaning | QuestionKind::CompoundMeaning => {
                "What is the English meaning?"
            }
            QuestionKind::CompoundReading => "What is the reading?",
        }
    }

    #[must_use]
    pub fn is_compound(self) -> bool {
        matches!(
            self,
            QuestionKind::CompoundReading | QuestionKind::CompoundMeaning
        )
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuestionKind::KunReading => "kunyomi",
            QuestionKind::OnReading => "onyomi",
            QuestionKind::EnglishMeaning => "english",
            QuestionKind::CompoundReading => "compound_reading",
            QuestionKind::CompoundMeaning => "compound_meaning",
        };
        f.write_str(label)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question.
///
/// The correct answer is always one of the options and options never repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    kind: QuestionKind,
    display_text: String,
    prompt_text: String,
    correct_answer: String,
    options: Vec<String>,
}

impl Question {
    /// Build a question, checking the option invariants.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AnswerNotInOptions` if `correct_answer` is missing from
    /// `options`, `QuestionError::DuplicateOption` on repeated options, and
    /// `QuestionError::EmptyText` if the display text or answer is blank.
    pub fn new(
        kind: QuestionKind,
        display_text: impl Into<String>,
        correct_answer: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let display_text = display_text.into();
        let correct_answer = correct_answer.into();
        if display_text.trim().is_empty() || correct_answer.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }
        if !seen.contains(correct_answer.as_str()) {
            return Err(QuestionError::AnswerNotInOptions(correct_answer));
        }

        Ok(Self {
            kind,
            display_text,
            prompt_text: kind.prompt().to_string(),
            correct_answer,
            options,
        })
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    #[must_use]
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn question_requires_answer_in_options() {
        let err = Question::new(
            QuestionKind::OnReading,
            "日",
            "ニチ",
            opts(&["カ", "スイ", "モク"]),
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::AnswerNotInOptions("ニチ".into()));
    }

    #[test]
    fn question_rejects_duplicates() {
        let err = Question::new(
            QuestionKind::OnReading,
            "日",
            "ニチ",
            opts(&["ニチ", "カ", "カ", "モク"]),
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::DuplicateOption("カ".into()));
    }

    #[test]
    fn question_takes_prompt_from_kind() {
        let q = Question::new(
            QuestionKind::KunReading,
            "月",
            "つき",
            opts(&["ひ", "つき", "みず", "き"]),
        )
        .unwrap();
        assert_eq!(q.prompt_text(), "What is the Kun'yomi reading?");
        assert!(q.is_correct("つき"));
        assert!(!q.is_correct("ひ"));
        assert_eq!(q.options().len(), 4);
    }

    #[test]
    fn compound_kinds_are_flagged() {
        assert!(QuestionKind::COMPOUND.iter().all(|k| k.is_compound()));
        assert!(QuestionKind::BASIC.iter().all(|k| !k.is_compound()));
    }
}
