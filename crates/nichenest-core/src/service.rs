//! The query service: sole authorized caller of the generative backend.
//!
//! Owns prompt construction, response-shape enforcement, and error
//! translation. Both operations are side-effect free and safe to retry;
//! repeated calls with the same inputs are not byte-identical because the
//! backend is generative, but nothing here depends on that.
//!
//! Parse policy:
//! - A reply that is not JSON at all fails the operation.
//! - For the list request, valid JSON that does not match the expected
//!   envelope is treated as "no data" (logged, empty result).
//! - For the details request any shape mismatch fails the operation; a
//!   missing section is never silently replaced with an empty list.

use instant::Instant;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::backend::{GenerationRequest, GenerativeBackend};
use crate::config::PAGE_SIZE;
use crate::error::{BackendError, FetchError};
use crate::model::{KeywordDetails, KeywordSummary, TimeRange};
use crate::{prompts, schema};

/// Expected envelope of the top-keywords reply.
#[derive(Debug, Deserialize)]
struct TopKeywordsReply {
    keywords: Vec<KeywordSummary>,
}

/// High-level keyword research operations over a [`GenerativeBackend`].
#[derive(Debug, Clone)]
pub struct KeywordService<B> {
    backend: B,
}

impl<B: GenerativeBackend> KeywordService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetches one page of ranked keyword opportunities.
    ///
    /// Returns at most [`PAGE_SIZE`] entries, each conforming to
    /// [`KeywordSummary`]. A structurally unexpected (but well-formed JSON)
    /// reply yields an empty list; a failed call or unparseable reply
    /// yields [`FetchError::TopKeywords`].
    pub async fn fetch_top_keywords(
        &self,
        time_range: TimeRange,
        low_competition_only: bool,
        page: u32,
    ) -> Result<Vec<KeywordSummary>, FetchError> {
        debug_assert!(page >= 1, "page numbering starts at 1");

        let started = Instant::now();
        let request = GenerationRequest {
            prompt: prompts::top_keywords(time_range, low_competition_only, page),
            response_schema: schema::top_keywords(),
        };

        let text = self
            .backend
            .generate(request)
            .await
            .map_err(|err| translate(err, FetchError::TopKeywords))?;

        let value: serde_json::Value = serde_json::from_str(&text).map_err(|err| {
            error!("Top-keywords reply is not valid JSON: {err}");
            FetchError::TopKeywords
        })?;

        let mut keywords = match serde_json::from_value::<TopKeywordsReply>(value) {
            Ok(reply) => reply.keywords,
            Err(err) => {
                warn!("Unexpected top-keywords response structure: {err}");
                Vec::new()
            }
        };

        keywords.retain(|summary| {
            let keep = !summary.keyword.is_empty();
            if !keep {
                warn!("Dropping keyword entry with empty keyword text");
            }
            keep
        });
        keywords.truncate(PAGE_SIZE);

        info!(
            count = keywords.len(),
            page,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched top keywords"
        );
        Ok(keywords)
    }

    /// Fetches detailed insights for one keyword surfaced by the list fetch.
    ///
    /// The reply must carry all three sections; any transport or parse
    /// failure becomes [`FetchError::Details`] naming the keyword.
    pub async fn fetch_keyword_details(
        &self,
        keyword: &str,
    ) -> Result<KeywordDetails, FetchError> {
        let started = Instant::now();
        let request = GenerationRequest {
            prompt: prompts::keyword_details(keyword),
            response_schema: schema::keyword_details(),
        };

        let text = self
            .backend
            .generate(request)
            .await
            .map_err(|err| translate(err, FetchError::Details(keyword.to_string())))?;

        let details = serde_json::from_str::<KeywordDetails>(&text).map_err(|err| {
            error!(keyword, "Keyword-details reply failed validation: {err}");
            FetchError::Details(keyword.to_string())
        })?;

        info!(
            keyword,
            related = details.related_keywords.len(),
            topics = details.profitable_topics.len(),
            tips = details.author_tips.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched keyword details"
        );
        Ok(details)
    }
}

/// Collapses a backend failure into the user-facing error for an operation.
///
/// The missing-credential case keeps its own actionable message; everything
/// else is logged here and reduced to the operation's generic message.
fn translate(err: BackendError, fallback: FetchError) -> FetchError {
    match err {
        BackendError::MissingApiKey => FetchError::MissingApiKey,
        other => {
            error!("Gemini call failed: {other}");
            fallback
        }
    }
}
