#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    InvalidRange,
    NoQuestions,
    KanjiNotFound,
    SentencesDisabled,
    SentencesFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::InvalidRange => "Please choose a valid kanji range.",
            ViewError::NoQuestions => {
                "Could not generate questions for this range. Try a wider range."
            }
            ViewError::KanjiNotFound => "That kanji does not exist.",
            ViewError::SentencesDisabled => {
                "Example sentences need an API key. Set KANJI_AI_API_KEY and restart."
            }
            ViewError::SentencesFailed => "Failed to generate sentences. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}
