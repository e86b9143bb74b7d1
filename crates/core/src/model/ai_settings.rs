use thiserror::Error;
use url::Url;

/// Connection settings for the example-sentence model API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AiSettings {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AiSettingsDraft {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AiSettingsError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
}

impl AiSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `AiSettingsError` if the base URL is present but invalid.
    pub fn validate(self) -> Result<AiSettings, AiSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let model = normalize_optional(self.model);
        let base_url = normalize_optional(self.base_url);

        if let Some(url) = base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(AiSettingsError::InvalidBaseUrl);
            }
        }

        Ok(AiSettings {
            api_key,
            model,
            base_url,
        })
    }
}

impl AiSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
