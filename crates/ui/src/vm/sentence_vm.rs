use std::collections::HashSet;

use kanji_core::model::ExampleSentence;
use services::{SentenceError, SentenceService};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceVm {
    pub furigana_html: String,
    pub translation: String,
    pub speech_text: String,
}

/// Keep only ruby markup from model output before it reaches `dangerous_inner_html`.
#[must_use]
pub fn sanitize_furigana(html: &str) -> String {
    let tags: HashSet<&str> = ["ruby", "rb", "rt", "rp"].into_iter().collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}

#[must_use]
pub fn map_sentences(sentences: &[ExampleSentence]) -> Vec<SentenceVm> {
    sentences
        .iter()
        .map(|sentence| SentenceVm {
            furigana_html: sanitize_furigana(&sentence.furigana_html),
            translation: sentence.translation.clone(),
            speech_text: sentence.sentence.clone(),
        })
        .collect()
}

/// # Errors
///
/// Returns `ViewError::SentencesDisabled` without an API key and
/// `ViewError::SentencesFailed` for any request or parse failure.
pub async fn fetch_sentences(
    service: &SentenceService,
    kanji: &str,
) -> Result<Vec<ExampleSentence>, ViewError> {
    service.generate(kanji).await.map_err(|err| match err {
        SentenceError::Disabled => ViewError::SentencesDisabled,
        _ => ViewError::SentencesFailed,
    })
}
