use std::mem;

use kanji_core::model::Question;

use super::progress::QuizProgress;
use crate::error::PracticeError;

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_answer: String },
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }

    /// Feedback line shown under the options.
    #[must_use]
    pub fn feedback(&self) -> String {
        match self {
            AnswerOutcome::Correct => "Correct!".to_string(),
            AnswerOutcome::Incorrect { correct_answer } => {
                format!("Incorrect! It's \"{correct_answer}\"")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    AwaitingAnswer { index: usize },
    Answered { index: usize, outcome: AnswerOutcome },
    Finished,
}

/// An endless multiple-choice quiz over a fixed question sequence.
///
/// The index wraps back to the first question after the last one; the quiz only
/// ends through [`QuizSession::quit`]. Moving on after an answer is always an
/// explicit [`QuizSession::advance`] call.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    state: QuizState,
    score: u32,
    total_answered: u32,
}

impl QuizSession {
    /// Start a quiz on the first question.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EmptyQuestionSequence` if `questions` is empty.
    pub fn start(questions: Vec<Question>) -> Result<Self, PracticeError> {
        if questions.is_empty() {
            return Err(PracticeError::EmptyQuestionSequence);
        }
        Ok(Self {
            questions,
            state: QuizState::AwaitingAnswer { index: 0 },
            score: 0,
            total_answered: 0,
        })
    }

    /// Answer the current question with `selected`.
    ///
    /// Returns `None` when the current question was already answered or the quiz
    /// is finished; nothing changes in that case.
    pub fn answer(&mut self, selected: &str) -> Option<AnswerOutcome> {
        let QuizState::AwaitingAnswer { index } = self.state else {
            return None;
        };
        let question = self.questions.get(index)?;

        let outcome = if question.is_correct(selected) {
            self.score = self.score.saturating_add(1);
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                correct_answer: question.correct_answer().to_string(),
            }
        };
        self.total_answered = self.total_answered.saturating_add(1);
        self.state = QuizState::Answered {
            index,
            outcome: outcome.clone(),
        };
        Some(outcome)
    }

    /// Move to the next question, wrapping after the last one.
    ///
    /// Only valid after an answer; returns `false` and does nothing otherwise.
    pub fn advance(&mut self) -> bool {
        let QuizState::Answered { index, .. } = self.state else {
            return false;
        };
        let next = (index + 1) % self.questions.len();
        self.state = QuizState::AwaitingAnswer { index: next };
        true
    }

    /// End the quiz, dropping the questions and returning the final tally.
    pub fn quit(&mut self) -> QuizProgress {
        self.state = QuizState::Finished;
        drop(mem::take(&mut self.questions));
        self.progress()
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::AwaitingAnswer { index } | QuizState::Answered { index, .. } => Some(index),
            QuizState::Finished => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        match &self.state {
            QuizState::Answered { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self.state, QuizState::Answered { .. })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished)
    }

    /// Number of questions in the sequence; zero once finished.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            score: self.score,
            total_answered: self.total_answered,
            position: self.current_index(),
            length: self.questions.len(),
        }
    }
}
