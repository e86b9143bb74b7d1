use serde::{Deserialize, Deserializer, Serialize};

use crate::reading::{first_reading, parenthesized_reading, split_readings};

//
// ─── VOCABULARY ────────────────────────────────────────────────────────────────
//

/// A vocabulary item attached to a kanji entry.
///
/// `term` may embed its reading in parentheses, e.g. `学校(がっこう)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabExample {
    #[serde(rename = "j")]
    pub term: String,
    #[serde(rename = "e")]
    pub english_gloss: String,
    #[serde(rename = "m", default)]
    pub note: String,
}

impl VocabExample {
    #[must_use]
    pub fn new(
        term: impl Into<String>,
        english_gloss: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            english_gloss: english_gloss.into(),
            note: note.into(),
        }
    }

    /// Reading embedded in the term, if any.
    #[must_use]
    pub fn reading(&self) -> Option<&str> {
        parenthesized_reading(&self.term)
    }
}

//
// ─── KANJI ENTRY ───────────────────────────────────────────────────────────────
//

/// One record of the kanji dataset.
///
/// Blank reading strings are normalized to `None` when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiEntry {
    #[serde(rename = "kanji")]
    pub character: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub kunyomi: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub onyomi: Option<String>,
    #[serde(default)]
    pub examples: Vec<VocabExample>,
}

impl KanjiEntry {
    #[must_use]
    pub fn new(
        character: impl Into<String>,
        kunyomi: Option<&str>,
        onyomi: Option<&str>,
        examples: Vec<VocabExample>,
    ) -> Self {
        Self {
            character: character.into(),
            kunyomi: normalize_optional(kunyomi.map(str::to_string)),
            onyomi: normalize_optional(onyomi.map(str::to_string)),
            examples,
        }
    }

    /// First kun'yomi token, trimmed.
    #[must_use]
    pub fn first_kunyomi(&self) -> Option<&str> {
        self.kunyomi.as_deref().and_then(first_reading)
    }

    /// First on'yomi token, trimmed.
    #[must_use]
    pub fn first_onyomi(&self) -> Option<&str> {
        self.onyomi.as_deref().and_then(first_reading)
    }

    #[must_use]
    pub fn kunyomi_list(&self) -> Vec<&str> {
        self.kunyomi.as_deref().map(split_readings).unwrap_or_default()
    }

    #[must_use]
    pub fn onyomi_list(&self) -> Vec<&str> {
        self.onyomi.as_deref().map(split_readings).unwrap_or_default()
    }

    #[must_use]
    pub fn first_example(&self) -> Option<&VocabExample> {
        self.examples.first()
    }

    #[must_use]
    pub fn second_example(&self) -> Option<&VocabExample> {
        self.examples.get(1)
    }

    /// Example used for compound-word questions.
    ///
    /// Picks the first multi-character term containing the kanji, then falls back to
    /// the second example, then the first. The fallback may not be a compound at all.
    #[must_use]
    pub fn compound_example(&self) -> Option<&VocabExample> {
        self.examples
            .iter()
            .find(|ex| ex.term.contains(self.character.as_str()) && ex.term.chars().count() > 1)
            .or_else(|| self.second_example())
            .or_else(|| self.first_example())
    }

    /// A well-formed entry carries at least one vocabulary example.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.character.trim().is_empty() && !self.examples.is_empty()
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_optional(value))
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
