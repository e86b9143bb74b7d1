use std::env;

use rand::Rng;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, warn};

use kanji_core::model::{AiSettings, AiSettingsDraft, ExampleSentence};

use crate::error::SentenceError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl SentenceConfig {
    /// Build a config from validated settings; `None` without an API key.
    #[must_use]
    pub fn from_settings(settings: &AiSettings) -> Option<Self> {
        let api_key = settings.api_key()?.to_string();
        Some(Self {
            base_url: settings.base_url().unwrap_or(DEFAULT_BASE_URL).to_string(),
            api_key,
            model: settings.model().unwrap_or(DEFAULT_MODEL).to_string(),
        })
    }

    /// Read `KANJI_AI_API_KEY`, `KANJI_AI_MODEL` and `KANJI_AI_BASE_URL`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let draft = AiSettingsDraft {
            api_key: env::var("KANJI_AI_API_KEY").ok(),
            model: env::var("KANJI_AI_MODEL").ok(),
            base_url: env::var("KANJI_AI_BASE_URL").ok(),
        };
        match draft.validate() {
            Ok(settings) => Self::from_settings(&settings),
            Err(err) => {
                warn!(%err, "ignoring example sentence settings");
                None
            }
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Fetches simple example sentences for a kanji from a generative model.
#[derive(Clone)]
pub struct SentenceService {
    client: Client,
    config: Option<SentenceConfig>,
}

impl SentenceService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SentenceConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<SentenceConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Ask the model for three example sentences using `kanji`.
    ///
    /// # Errors
    ///
    /// Returns `SentenceError` when the service is disabled, the request fails,
    /// or the response cannot be parsed.
    pub async fn generate(&self, kanji: &str) -> Result<Vec<ExampleSentence>, SentenceError> {
        let config = self.config.as_ref().ok_or(SentenceError::Disabled)?;

        let payload = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: build_prompt(kanji),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        debug!(kanji, model = %config.model, "requesting example sentences");
        let response = self
            .client
            .post(config.endpoint())
            .query(&[("key", config.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .inspect_err(|err| warn!(kanji, %err, "example sentence request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(kanji, %status, "example sentence request rejected");
            return Err(SentenceError::HttpStatus { status, body });
        }

        let body = response.text().await?;
        parse_sentences(&body).inspect_err(|err| warn!(kanji, %err, "unusable sentence response"))
    }
}

/// Prompt sent to the model for `kanji`.
#[must_use]
pub fn build_prompt(kanji: &str) -> String {
    format!(
        "Create exactly 3 very simple Japanese example sentences for an N5 learner using the kanji \"{kanji}\". For any other kanji in the sentence, you MUST provide furigana. The output must be in a structured JSON format."
    )
}

/// Extract sentences from a `generateContent` response body.
///
/// The model returns its JSON as text inside the first candidate part.
///
/// # Errors
///
/// Returns `SentenceError::MalformedResponse` if either JSON layer is invalid and
/// `SentenceError::EmptyResponse` if there is no candidate text.
pub fn parse_sentences(body: &str) -> Result<Vec<ExampleSentence>, SentenceError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .filter(|text| !text.trim().is_empty())
        .ok_or(SentenceError::EmptyResponse)?;

    Ok(serde_json::from_str(text.trim())?)
}

/// Reorder sentences in place.
pub fn shuffle_sentences<R: Rng + ?Sized>(sentences: &mut [ExampleSentence], rng: &mut R) {
    sentences.shuffle(rng);
}

const FURIGANA_HINT: &str = "The sentence with furigana in HTML ruby tags. Example: \
<ruby>私<rt>わたし</rt></ruby>は<ruby>学生<rt>がくせい</rt></ruby>です。";

fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "sentence": { "type": "STRING" },
                "furigana_html": {
                    "type": "STRING",
                    "description": FURIGANA_HINT
                },
                "translation": { "type": "STRING" }
            },
            "required": ["sentence", "furigana_html", "translation"]
        }
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
