use async_trait::async_trait;

use crate::core::errors::ClientError;

/// Turns text into a fixed-length vector using a hosted embedding model.
#[async_trait]
pub trait Embedder: Send + Sync {
    fn model(&self) -> &str;

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ClientError>;
}
