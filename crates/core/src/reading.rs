//! Helpers for pulling readings out of the dataset's loosely formatted strings.

use std::sync::LazyLock;

use regex::Regex;

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(（](.*?)[)）]").expect("static reading pattern is valid"));

/// Returns the first token of a comma-separated reading list, trimmed.
///
/// Full-width commas are treated as separators as well.
///
/// ```
/// # use kanji_core::reading::first_reading;
/// assert_eq!(first_reading("ひと, -り"), Some("ひと"));
/// assert_eq!(first_reading("  "), None);
/// ```
#[must_use]
pub fn first_reading(readings: &str) -> Option<&str> {
    readings
        .split([',', '、', '，'])
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Splits a comma-separated reading list into trimmed, non-empty tokens.
#[must_use]
pub fn split_readings(readings: &str) -> Vec<&str> {
    readings
        .split([',', '、', '，'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Extracts the reading embedded in a vocabulary term such as `学校(がっこう)`.
///
/// Returns `None` when the term has no parenthesized part or the part is empty.
#[must_use]
pub fn parenthesized_reading(term: &str) -> Option<&str> {
    PARENTHESIZED
        .captures(term)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|reading| !reading.is_empty())
}

/// Returns the word part of a vocabulary term, without its reading annotation.
///
/// `学校 (がっこう)` and `学校(がっこう)` both yield `学校`. Unlike splitting on the
/// first space, an unspaced reading is cut off too, so a compound prompt never
/// shows its own answer.
#[must_use]
pub fn compound_word(term: &str) -> &str {
    let trimmed = term.trim();
    let end = trimmed
        .find(|c: char| c.is_whitespace() || c == '(' || c == '（')
        .unwrap_or(trimmed.len());
    let word = trimmed[..end].trim();
    if word.is_empty() { trimmed } else { word }
}

/// Text to hand to speech playback: the reading if one is embedded, else the term.
#[must_use]
pub fn spoken_form(term: &str) -> &str {
    parenthesized_reading(term).unwrap_or(term)
}
