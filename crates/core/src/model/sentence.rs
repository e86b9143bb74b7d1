use serde::{Deserialize, Serialize};

/// An AI-generated example sentence for a kanji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub sentence: String,
    /// The sentence with `<ruby>` furigana markup. Untrusted; sanitize before rendering.
    pub furigana_html: String,
    pub translation: String,
}
