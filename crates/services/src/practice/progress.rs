/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub score: u32,
    pub total_answered: u32,
    /// Zero-based index of the current question; `None` once finished.
    pub position: Option<usize>,
    pub length: usize,
}

impl QuizProgress {
    /// Score label in the `score/total` form shown above the quiz.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.total_answered)
    }
}
