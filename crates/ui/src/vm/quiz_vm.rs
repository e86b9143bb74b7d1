use kanji_core::model::PracticeSettings;
use services::{PracticeError, PracticeService, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    /// Set once answered, on the correct option only.
    pub highlight: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub display_text: String,
    pub prompt_text: String,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    pub feedback: Option<String>,
    pub feedback_correct: bool,
    pub score_label: String,
}

/// Snapshot of the current question; `None` once the quiz is finished.
#[must_use]
pub fn map_quiz(session: &QuizSession) -> Option<QuizVm> {
    let question = session.current_question()?;
    let answered = session.is_answered();
    let options = question
        .options()
        .iter()
        .map(|option| OptionVm {
            label: option.clone(),
            highlight: answered && question.is_correct(option),
        })
        .collect();
    let outcome = session.last_outcome();

    Some(QuizVm {
        display_text: question.display_text().to_string(),
        prompt_text: question.prompt_text().to_string(),
        options,
        answered,
        feedback: outcome.map(services::AnswerOutcome::feedback),
        feedback_correct: outcome.is_some_and(services::AnswerOutcome::is_correct),
        score_label: session.progress().score_label(),
    })
}

/// # Errors
///
/// Returns `ViewError::InvalidRange` for unusable ranges and
/// `ViewError::NoQuestions` when the range cannot support a quiz.
pub fn start_quiz(
    practice: &PracticeService,
    settings: &PracticeSettings,
) -> Result<QuizSession, ViewError> {
    practice.start_quiz(settings).map_err(|err| match err {
        PracticeError::EmptyRange { .. } | PracticeError::RangeOutOfBounds { .. } => {
            ViewError::InvalidRange
        }
        PracticeError::EmptyQuestionSequence => ViewError::NoQuestions,
        _ => ViewError::Unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanji_core::model::{Question, QuestionKind};

    fn session() -> QuizSession {
        let options = ["ニチ", "ゲツ", "カ", "スイ"].map(String::from).to_vec();
        let question = Question::new(QuestionKind::OnReading, "日", "ニチ", options).unwrap();
        QuizSession::start(vec![question]).unwrap()
    }

    #[test]
    fn unanswered_question_has_no_highlight() {
        let vm = map_quiz(&session()).unwrap();
        assert_eq!(vm.display_text, "日");
        assert_eq!(vm.prompt_text, "What is the On'yomi reading?");
        assert!(!vm.answered);
        assert!(vm.options.iter().all(|o| !o.highlight));
        assert_eq!(vm.feedback, None);
        assert_eq!(vm.score_label, "0/0");
    }

    #[test]
    fn wrong_answer_highlights_correct_option() {
        let mut session = session();
        session.answer("カ");
        let vm = map_quiz(&session).unwrap();

        let highlighted: Vec<_> = vm
            .options
            .iter()
            .filter(|o| o.highlight)
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(highlighted, ["ニチ"]);
        assert_eq!(vm.feedback.as_deref(), Some("Incorrect! It's \"ニチ\""));
        assert!(!vm.feedback_correct);
        assert_eq!(vm.score_label, "0/1");
    }

    #[test]
    fn finished_quiz_has_no_view() {
        let mut session = session();
        session.quit();
        assert!(map_quiz(&session).is_none());
    }
}
