use thiserror::Error;

/// Snapshot of an upstream reply kept on [`SourceError::Api`] for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Request URL with credential parameters redacted.
    pub url: String,
    pub body: String,
}

/// Errors returned by every provider operation.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream answered with a non-2xx status, a non-JSON body, or a
    /// body missing the expected payload key.
    #[error("{message}")]
    Api {
        message: String,
        response: Option<RawResponse>,
    },

    /// Network or TLS failure; no response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{capability} is not implemented for {provider}")]
    NotImplemented {
        provider: &'static str,
        capability: &'static str,
    },

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl SourceError {
    /// The standard failure raised when a provider's API misbehaves.
    pub(crate) fn api(provider: &str, response: RawResponse) -> Self {
        SourceError::Api {
            message: format!("An error occurred with {provider} API"),
            response: Some(response),
        }
    }

    /// The upstream reply behind an [`SourceError::Api`] failure, if any.
    #[must_use]
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            SourceError::Api { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

impl From<benchplaces_core::UnknownProviderKind> for SourceError {
    fn from(err: benchplaces_core::UnknownProviderKind) -> Self {
        SourceError::UnknownProvider(err.0)
    }
}
