use crate::{embeddings::EmbedderError, moderation::ModerationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Moderation error")]
    Moderation(#[from] ModerationError),
    #[error("Embedder error")]
    Embedder(#[from] EmbedderError),
}
