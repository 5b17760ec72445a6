use thiserror::Error;

use crate::core::config::{ConfigError, MissingSecret};
use crate::core::errors::ClientError;

#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Error: {0}!")]
    MissingSecret(#[from] MissingSecret),

    #[error("Error initializing Pinecone: {0}")]
    VectorStore(#[source] ClientError),
}
