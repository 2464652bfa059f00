use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::utils::{resolve_api_key, API_KEY_VAR};

/// Model used when the caller doesn't pick one.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

const EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";

#[derive(Debug, Error)]
pub enum EmbedderError {
    #[error("Missing api key: env var `{0}` not set")]
    MissingApiKey(String),
    #[error("RequestError: {0}")]
    RequestError(String),
    #[error("ParseError: {0}")]
    ParseError(String),
    #[error("Provider error: {0}")]
    ProviderError(String),
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    pub embedding: Vec<f64>,
}

/// Fetches the embedding vector for `text`, or `None` if the call failed.
///
/// The model defaults to [`DEFAULT_EMBEDDING_MODEL`] and the key to the
/// `OPENAI_API_KEY` environment variable. Failures are logged and swallowed;
/// use [`try_get_embedding`] to get the error instead.
pub async fn get_embedding(
    text: &str,
    model: Option<&str>,
    api_key: Option<&str>,
) -> Option<Vec<f64>> {
    embed_or_report(
        EMBEDDINGS_URL,
        text,
        model.unwrap_or(DEFAULT_EMBEDDING_MODEL),
        api_key,
    )
    .await
}

/// Fallible variant of [`get_embedding`].
///
/// # Errors
/// Returns an [`EmbedderError`] when the key can't be resolved, the request
/// fails, the endpoint responds with a non-success status, or the body can't
/// be decoded.
pub async fn try_get_embedding(
    text: &str,
    model: Option<&str>,
    api_key: Option<&str>,
) -> Result<Vec<f64>, EmbedderError> {
    embed(
        EMBEDDINGS_URL,
        text,
        model.unwrap_or(DEFAULT_EMBEDDING_MODEL),
        api_key,
    )
    .await
}

async fn embed_or_report(
    api_url: &str,
    text: &str,
    model: &str,
    api_key: Option<&str>,
) -> Option<Vec<f64>> {
    match embed(api_url, text, model, api_key).await {
        Ok(embedding) => Some(embedding),
        Err(e) => {
            error!("Failed to compute embedding: {e}");
            None
        }
    }
}

async fn embed(
    api_url: &str,
    text: &str,
    model: &str,
    api_key: Option<&str>,
) -> Result<Vec<f64>, EmbedderError> {
    let api_key = resolve_api_key(api_key)
        .ok_or_else(|| EmbedderError::MissingApiKey(API_KEY_VAR.to_string()))?;
    // newlines degrade embedding quality on older models
    let text = text.replace('\n', " ");
    let client = Client::new();
    let request_body = json!({
            "input": text,
            "model": model,
    });
    let response = client
        .post(api_url)
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .json(&request_body)
        .send()
        .await
        .map_err(|e| EmbedderError::RequestError(e.to_string()))?;

    if response.status().is_success() {
        let response = response
            .json::<EmbeddingResponse>()
            .await
            .map_err(|e| EmbedderError::ParseError(e.to_string()))?;

        response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbedderError::ParseError("response contained no embeddings".to_string()))
    } else {
        let error_message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(EmbedderError::ProviderError(error_message))
    }
}
