use thiserror::Error;

use crate::model::{AiSettingsError, DatasetError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    AiSettings(#[from] AiSettingsError),
}
