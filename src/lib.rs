//! # Querykit
//!
//! Stateless helpers around the OpenAI HTTP API for building LLM agents:
//!
//! - **Moderation**: check whether a user query is safe to forward
//! - **Embeddings**: fetch embedding vectors for a piece of text
//! - **Similarity**: cosine distance and k-nearest lookup over
//!   precomputed function embeddings
//!
//! Every helper is an independent async function; there is no client to
//! construct and no state shared between calls. Credentials come from an
//! explicit argument or the `OPENAI_API_KEY` environment variable.
//!
//! ## Example
//!
//! ```rust,no_run
//! use querykit::moderation::is_query_safe;
//! use querykit::similarity::{find_nearest, FunctionEmbedding};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), querykit::error::Error> {
//!     let query = "What's the weather in Addis Ababa?";
//!     if !is_query_safe(query, None).await? {
//!         return Ok(());
//!     }
//!
//!     let functions = vec![FunctionEmbedding {
//!         name: "get_weather".to_string(),
//!         embedding: vec![0.1, 0.2, 0.3],
//!     }];
//!     if let Some(matches) = find_nearest(query, &functions, 1).await {
//!         println!("best match: {}", matches[0].name);
//!     }
//!     Ok(())
//! }
//! ```

/// Text embedding retrieval
pub mod embeddings;

/// Error types for all library operations
pub mod error;

/// Content moderation support
pub mod moderation;

/// Cosine distance and nearest-neighbor lookup
pub mod similarity;

/// Small standalone helpers
pub mod utils;
