//! Error types for the NicheNest query service.

use thiserror::Error;

/// Errors produced inside the generative backend.
///
/// These never reach the view controller: [`KeywordService`] logs the cause
/// and collapses it into a user-readable [`FetchError`].
///
/// [`KeywordService`]: crate::service::KeywordService
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// No API credential was configured.
    #[error("Gemini API key is not configured")]
    MissingApiKey,
    /// The HTTP request itself failed (DNS, connection, body read).
    #[error("Request failed: {0}")]
    Request(String),
    /// The API answered with a non-success status.
    #[error("Gemini API returned status {code}: {body}")]
    Status { code: u16, body: String },
    /// The reply envelope carried no generated text.
    #[error("Gemini reply contained no candidates")]
    EmptyReply,
}

impl BackendError {
    /// Whether a retry has a chance of succeeding.
    ///
    /// Transport failures and throttling/server-side statuses are retried;
    /// a missing key, a client-side rejection, or an empty reply are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Status { code, .. } => *code == 429 || *code >= 500,
            Self::MissingApiKey | Self::EmptyReply => false,
        }
    }
}

/// User-facing fetch failures, the only error type the view controller sees.
///
/// The messages are surfaced verbatim in the error panel, so they stay free
/// of transport details. Underlying causes are logged at the point where
/// they are collapsed into one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The credential was absent at call time.
    #[error("Gemini API key is missing. Set GEMINI_API_KEY and restart.")]
    MissingApiKey,
    /// The top-keywords request failed.
    #[error("Failed to fetch keyword data from the Gemini API.")]
    TopKeywords,
    /// The keyword-details request failed; carries the keyword that failed.
    #[error("Failed to fetch detailed insights for \"{0}\".")]
    Details(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_statuses() {
        assert!(BackendError::Request("timed out".into()).is_transient());
        assert!(BackendError::Status {
            code: 429,
            body: String::new()
        }
        .is_transient());
        assert!(BackendError::Status {
            code: 503,
            body: String::new()
        }
        .is_transient());
        assert!(!BackendError::Status {
            code: 400,
            body: String::new()
        }
        .is_transient());
        assert!(!BackendError::MissingApiKey.is_transient());
        assert!(!BackendError::EmptyReply.is_transient());
    }

    #[test]
    fn details_error_names_the_keyword() {
        let err = FetchError::Details("cozy mystery plots".into());
        assert_eq!(
            err.to_string(),
            "Failed to fetch detailed insights for \"cozy mystery plots\"."
        );
    }
}
