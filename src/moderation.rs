use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::utils::{resolve_api_key, API_KEY_VAR};

const MODERATIONS_URL: &str = "https://api.openai.com/v1/moderations";

#[derive(Debug, Error)]
pub enum ModerationError {
    #[error("Missing api key: env var `{0}` not set")]
    MissingApiKey(String),
    #[error("RequestError: {0}")]
    RequestError(String),
    #[error("ParseError: {0}")]
    ParseError(String),
    #[error("Provider error: {0}")]
    ProviderError(String),
}

#[derive(Debug, Deserialize)]
struct ModerationResponse {
    #[serde(default)]
    results: Vec<ModerationResult>,
}

// The moderation endpoint also returns per-category scores; only the
// aggregate flag matters here.
#[derive(Debug, Default, Deserialize)]
struct ModerationResult {
    #[serde(default)]
    flagged: bool,
}

/// Returns `Ok(true)` if the query is considered safe, `Ok(false)` if the
/// moderation endpoint flagged it.
///
/// Uses the `OPENAI_API_KEY` environment variable when no key is passed.
/// A response with no results or no flag field counts as safe.
///
/// # Errors
/// Unlike [`get_embedding`](crate::embeddings::get_embedding), failures are
/// not swallowed: request, status and decode errors all surface as
/// [`ModerationError`].
pub async fn is_query_safe(query: &str, api_key: Option<&str>) -> Result<bool, ModerationError> {
    moderate(MODERATIONS_URL, query, api_key).await
}

async fn moderate(
    api_url: &str,
    query: &str,
    api_key: Option<&str>,
) -> Result<bool, ModerationError> {
    let api_key = resolve_api_key(api_key)
        .ok_or_else(|| ModerationError::MissingApiKey(API_KEY_VAR.to_string()))?;
    let client = Client::new();
    let request_body = json!({
            "input": query,
    });
    let response = client
        .post(api_url)
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .json(&request_body)
        .send()
        .await
        .map_err(|e| ModerationError::RequestError(e.to_string()))?;

    if !response.status().is_success() {
        let error_message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        return Err(ModerationError::ProviderError(error_message));
    }

    let response = response
        .json::<ModerationResponse>()
        .await
        .map_err(|e| ModerationError::ParseError(e.to_string()))?;

    let result = response.results.into_iter().next().unwrap_or_default();
    if result.flagged {
        debug!("Query '{query}' was flagged by the moderation endpoint");
        return Ok(false);
    }

    Ok(true)
}
