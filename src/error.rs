use thiserror::Error;

#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("unsupported language code: '{0}'")]
    UnsupportedLanguage(String),

    #[error("language detection failed: {0}")]
    Detection(String),

    #[error("translation failed: {0}")]
    Translation(String),

    #[error("translation API error ({status}): {body}")]
    Http { status: u16, body: String },

    #[error("translation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("part-of-speech tagging failed: {0}")]
    Tagging(String),

    #[error("lemmatization of '{word}' failed: {reason}")]
    Lemmatization { word: String, reason: String },
}

impl CapabilityError {
    /// Whether retrying the same request could succeed.
    ///
    /// Rate limits, server errors and transport failures are transient; any
    /// other HTTP status (bad request, auth) will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            CapabilityError::Http { status, .. } => *status == 429 || *status >= 500,
            CapabilityError::Transport(_) => true,
            _ => false,
        }
    }
}
