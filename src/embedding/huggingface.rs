//! Hugging Face feature-extraction client.
//!
//! - Endpoint: `POST {base_url}/{model}/pipeline/feature-extraction`
//! - Auth: `Authorization: Bearer {token}` when a token is configured
//! - Body: `{ "inputs": "text" }`
//! - Response: a pooled vector (`[f32]`) for sentence-transformers models,
//!   or a batch of one (`[[f32]]`) for some deployments

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::provider::Embedder;
use crate::core::errors::ClientError;

const SERVICE: &str = "huggingface";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeatureExtractionResponse {
    Single(Vec<f32>),
    Batch(Vec<Vec<f32>>),
}

impl FeatureExtractionResponse {
    fn into_vector(self) -> Option<Vec<f32>> {
        let vector = match self {
            FeatureExtractionResponse::Single(vector) => vector,
            FeatureExtractionResponse::Batch(rows) => rows.into_iter().next()?,
        };
        (!vector.is_empty()).then_some(vector)
    }
}

#[derive(Clone)]
pub struct HuggingFaceEmbedder {
    endpoint: String,
    model: String,
    token: Option<String>,
    client: Client,
}

impl HuggingFaceEmbedder {
    pub fn new(base_url: &str, model: String, token: Option<String>) -> Self {
        let endpoint = format!(
            "{}/{}/pipeline/feature-extraction",
            base_url.trim_end_matches('/'),
            model
        );
        Self {
            endpoint,
            model,
            token,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Embedder for HuggingFaceEmbedder {
    fn model(&self) -> &str {
        &self.model
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ClientError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "inputs": text }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let res = request
            .send()
            .await
            .map_err(|e| ClientError::request(SERVICE, e))?;

        if !res.status().is_success() {
            return Err(ClientError::from_response(SERVICE, res).await);
        }

        let payload: FeatureExtractionResponse = res
            .json()
            .await
            .map_err(|e| ClientError::invalid(SERVICE, e))?;

        payload
            .into_vector()
            .ok_or_else(|| ClientError::invalid(SERVICE, "empty embedding"))
    }
}
