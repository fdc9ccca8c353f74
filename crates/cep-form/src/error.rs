use thiserror::Error;

/// Why a CEP lookup produced no address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The service answered with a non-success status.
    #[error("CEP not found (HTTP {status})")]
    NotFound { status: u16 },
    #[error("CEP lookup request failed: {0}")]
    Transport(String),
    #[error("malformed CEP lookup response: {0}")]
    Decode(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize form snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage backend rejected the write: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form is not submittable: a field is empty or invalid")]
    NotSubmittable,
}

#[derive(Debug, Error)]
#[error("invalid form configuration: {0}")]
pub struct ConfigError(#[from] toml::de::Error);
