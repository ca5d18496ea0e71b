//! Gemini endpoint configuration and shared constants.
//!
//! The API credential is injected into [`GeminiConfig`] at construction time
//! rather than read from the environment ad hoc, so tests can substitute a
//! stub backend without touching process state.

/// Number of keyword cards per page.
///
/// The list prompt asks the model for exactly this many keywords, and the
/// "more results available" heuristic treats a full page as evidence that
/// another page exists.
pub const PAGE_SIZE: usize = 12;

/// Gemini model used for both the list and the detail request.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the Gemini REST API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the Gemini API key.
///
/// Read at process start on native builds. WASM has no process environment,
/// so web builds bake the value in at compile time instead (see
/// [`GeminiConfig::from_env`]).
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Connection settings for the Gemini backend.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API credential. `None` surfaces as a fetch error on the first call,
    /// never as a silent empty result.
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// API base URL without a trailing slash.
    pub api_base: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: GEMINI_MODEL.to_string(),
            api_base: GEMINI_API_BASE.to_string(),
        }
    }
}

impl GeminiConfig {
    /// Builds a config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Builds a config from `GEMINI_API_KEY`.
    ///
    /// Native builds read the variable at runtime; WASM builds capture it at
    /// compile time via `option_env!` because browsers expose no process
    /// environment.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let api_key = std::env::var(API_KEY_ENV).ok();

        #[cfg(target_arch = "wasm32")]
        let api_key = option_env!("GEMINI_API_KEY").map(str::to_owned);

        Self {
            api_key,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credential() {
        let config = GeminiConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, GEMINI_MODEL);
        assert!(!config.api_base.ends_with('/'));
    }

    #[test]
    fn new_sets_credential() {
        let config = GeminiConfig::new("test-key");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
    }
}
