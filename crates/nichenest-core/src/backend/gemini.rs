//! Gemini REST implementation of the generative backend.
//!
//! reqwest works on both native and WASM platforms: hyper with rustls on
//! native, the browser `fetch()` API on WASM. The client is shared for
//! connection reuse between the list and detail requests. No request
//! timeout is set; the UI keeps its loading mode until the call resolves.

use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::{GenerationRequest, GenerativeBackend};
use crate::config::GeminiConfig;
use crate::error::BackendError;

/// Attempts per request, counting the first one.
const MAX_ATTEMPTS: u32 = 3;

/// Base delay doubled on each retry (native only).
#[cfg(not(target_arch = "wasm32"))]
const RETRY_BASE_DELAY_MS: u64 = 250;

/// Shared HTTP client for connection pooling across requests.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Reply envelope of `models.generateContent`. Only the first candidate's
/// text is consumed; everything else is ignored.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Calls the Gemini `generateContent` endpoint with a response schema.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    config: GeminiConfig,
}

impl GeminiBackend {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }

    async fn attempt(&self, api_key: &str, request: &GenerationRequest) -> Result<String, BackendError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": request.prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema,
            },
        });

        let response = HTTP_CLIENT
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| BackendError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| BackendError::Request(err.to_string()))?;

        envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .map(|text| text.trim().to_string())
            .ok_or(BackendError::EmptyReply)
    }
}

#[async_trait::async_trait(?Send)]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, request: GenerationRequest) -> Result<String, BackendError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(BackendError::MissingApiKey)?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt(api_key, &request).await {
                Ok(text) => return Ok(text),
                Err(err) if attempt < MAX_ATTEMPTS && err.is_transient() => {
                    warn!(attempt, "Gemini request failed, retrying: {err}");
                    backoff(attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Doubling delay between attempts.
#[cfg(not(target_arch = "wasm32"))]
async fn backoff(attempt: u32) {
    let delay = RETRY_BASE_DELAY_MS << (attempt - 1);
    tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
}

/// Browser builds retry immediately; there is no portable timer without
/// pulling in another dependency, and fetch failures there resolve fast.
#[cfg(target_arch = "wasm32")]
async fn backoff(_attempt: u32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_includes_model_and_base() {
        let backend = GeminiBackend::new(GeminiConfig::new("k"));
        assert_eq!(
            backend.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let backend = GeminiBackend::new(GeminiConfig::default());
        let result = backend
            .generate(GenerationRequest {
                prompt: "hello".into(),
                response_schema: json!({ "type": "OBJECT" }),
            })
            .await;
        assert!(matches!(result, Err(BackendError::MissingApiKey)));
    }

    #[test]
    fn envelope_extracts_first_part_text() {
        let envelope: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":" {\"keywords\":[]} "}]}}]}"#,
        )
        .unwrap();
        let text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap();
        assert_eq!(text.trim(), "{\"keywords\":[]}");
    }
}
