//! Generative backend abstraction.
//!
//! The query service talks to the outside world through exactly one seam,
//! the [`GenerativeBackend`] trait. Production code uses [`GeminiBackend`];
//! tests substitute a stub that replays canned replies.

mod gemini;

pub use gemini::GeminiBackend;

use crate::error::BackendError;
use serde_json::Value;

/// One structured-output generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Natural-language prompt.
    pub prompt: String,
    /// Schema the reply must conform to (Gemini `responseSchema`).
    pub response_schema: Value,
}

/// A generative text service that answers with schema-constrained JSON.
///
/// `?Send` because the WASM build runs futures on a single-threaded
/// executor, same as the rest of the front-end.
#[async_trait::async_trait(?Send)]
pub trait GenerativeBackend {
    /// Runs one generation and returns the reply's JSON text.
    ///
    /// The returned string is the raw model output; callers own parsing and
    /// shape validation.
    #[must_use = "Backend failures should be translated into fetch errors"]
    async fn generate(&self, request: GenerationRequest) -> Result<String, BackendError>;
}
