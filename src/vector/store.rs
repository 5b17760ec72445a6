//! Read-only interface to the hosted passage index.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::ClientError;

/// A passage returned by a similarity query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedPassage {
    /// Identifier assigned by the index.
    pub id: String,
    /// The passage text.
    pub text: String,
    /// Similarity score (higher = better).
    pub score: f32,
    /// `source` metadata, when the index stored one.
    pub source: Option<String>,
}

#[async_trait]
pub trait VectorStore: Send + Sync {
    fn index_name(&self) -> &str;

    /// Returns up to `top_k` passages most similar to `embedding`, best first.
    async fn search(
        &self,
        embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<RetrievedPassage>, ClientError>;
}
