//! Pinecone REST client.
//!
//! Connecting resolves the data-plane host of an existing index through the
//! control plane (`GET {controller}/indexes/{name}`); queries then go to
//! `POST https://{host}/query`. The index is never written to.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::store::{RetrievedPassage, VectorStore};
use crate::core::config::settings::VectorStoreSettings;
use crate::core::errors::ClientError;

const SERVICE: &str = "pinecone";
const API_KEY_HEADER: &str = "Api-Key";
const API_VERSION_HEADER: &str = "X-Pinecone-API-Version";

#[derive(Debug, Deserialize)]
struct DescribeIndexResponse {
    host: String,
    #[serde(default)]
    dimension: Option<u32>,
    #[serde(default)]
    metric: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<Map<String, Value>>,
}

#[derive(Clone)]
pub struct PineconeIndex {
    index_name: String,
    data_url: String,
    text_key: String,
    api_key: String,
    api_version: String,
    client: Client,
}

impl PineconeIndex {
    /// Connects to an existing index. Uses `settings.host` when configured,
    /// otherwise asks the control plane for it.
    pub async fn connect(
        settings: &VectorStoreSettings,
        api_key: String,
    ) -> Result<Self, ClientError> {
        let client = Client::new();
        let host = match &settings.host {
            Some(host) => host.clone(),
            None => {
                let url = format!(
                    "{}/indexes/{}",
                    settings.controller_url.trim_end_matches('/'),
                    settings.index_name
                );
                let res = with_headers(client.get(&url), &api_key, &settings.api_version)
                    .send()
                    .await
                    .map_err(|e| ClientError::request(SERVICE, e))?;

                if !res.status().is_success() {
                    return Err(ClientError::from_response(SERVICE, res).await);
                }

                let description: DescribeIndexResponse = res
                    .json()
                    .await
                    .map_err(|e| ClientError::invalid(SERVICE, e))?;
                tracing::info!(
                    "Connected to index '{}' (dimension: {:?}, metric: {:?})",
                    settings.index_name,
                    description.dimension,
                    description.metric
                );
                description.host
            }
        };

        Ok(Self {
            index_name: settings.index_name.clone(),
            data_url: data_plane_url(&host),
            text_key: settings.text_key.clone(),
            api_key,
            api_version: settings.api_version.clone(),
            client,
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

fn with_headers(builder: RequestBuilder, api_key: &str, api_version: &str) -> RequestBuilder {
    builder
        .header(API_KEY_HEADER, api_key)
        .header(API_VERSION_HEADER, api_version)
}

fn data_plane_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

fn into_passage(item: QueryMatch, text_key: &str) -> RetrievedPassage {
    let metadata = item.metadata.unwrap_or_default();
    let text = metadata
        .get(text_key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let source = metadata
        .get("source")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    RetrievedPassage {
        id: item.id,
        text,
        score: item.score,
        source,
    }
}

#[async_trait]
impl VectorStore for PineconeIndex {
    fn index_name(&self) -> &str {
        &self.index_name
    }

    async fn search(
        &self,
        embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<RetrievedPassage>, ClientError> {
        let url = format!("{}/query", self.data_url);
        let body = json!({
            "vector": embedding,
            "topK": top_k,
            "includeMetadata": true,
            "includeValues": false,
        });

        let res = with_headers(self.client.post(&url), &self.api_key, &self.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::request(SERVICE, e))?;

        if !res.status().is_success() {
            return Err(ClientError::from_response(SERVICE, res).await);
        }

        let payload: QueryResponse = res
            .json()
            .await
            .map_err(|e| ClientError::invalid(SERVICE, e))?;

        Ok(payload
            .matches
            .into_iter()
            .map(|item| into_passage(item, &self.text_key))
            .collect())
    }
}
