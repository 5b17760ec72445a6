use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::assets::AssetBundle;
use crate::core::config::{AppPaths, ConfigService, Secrets, Settings};
use crate::embedding::HuggingFaceEmbedder;
use crate::llm::GroqProvider;
use crate::rag::RagPipeline;
use crate::session::{ChatService, SessionStore};
use crate::vector::PineconeIndex;

pub mod error;

pub use error::InitializationError;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub assets: AssetBundle,
    pub sessions: SessionStore,
    pub chat: ChatService,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Initializes the application state.
    ///
    /// This process includes:
    /// 1. Loading and validating `config.yml`
    /// 2. Reading the required secrets from the environment
    /// 3. Connecting to the existing vector index
    /// 4. Loading the static assets
    pub async fn initialize(paths: Arc<AppPaths>) -> Result<Arc<Self>, InitializationError> {
        let settings = ConfigService::new(paths.clone()).load_settings()?;
        Self::initialize_from(&paths, settings, |key| std::env::var(key).ok()).await
    }

    /// Same as [`AppState::initialize`] with explicit settings and secret
    /// lookup. Secrets are checked before any network call is made.
    pub async fn initialize_from<F>(
        paths: &AppPaths,
        settings: Settings,
        lookup: F,
    ) -> Result<Arc<Self>, InitializationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets = Secrets::from_lookup(lookup)?;
        tracing::debug!("Loaded secrets: {:?}", secrets);

        let index = PineconeIndex::connect(&settings.vector_store, secrets.pinecone_api_key)
            .await
            .map_err(InitializationError::VectorStore)?;

        let embedder = HuggingFaceEmbedder::new(
            &settings.embedding.base_url,
            settings.embedding.model.clone(),
            secrets.huggingface_token,
        );
        let llm = GroqProvider::new(
            &settings.llm.base_url,
            secrets.groq_api_key,
            settings.llm.model.clone(),
        );

        let pipeline = RagPipeline::new(Arc::new(embedder), Arc::new(index), Arc::new(llm));
        Ok(Self::with_pipeline(paths, settings, pipeline))
    }

    pub fn with_pipeline(
        paths: &AppPaths,
        settings: Settings,
        pipeline: RagPipeline,
    ) -> Arc<Self> {
        let assets = AssetBundle::load(paths, &settings.ui);
        Arc::new(AppState {
            settings,
            assets,
            sessions: SessionStore::new(),
            chat: ChatService::new(pipeline),
            started_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_secret_halts_before_connecting() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = AppPaths::from_dirs(dir.path().to_path_buf(), dir.path().join("data"));
        let mut settings = Settings::default();
        // unroutable; a connection attempt would surface as VectorStore error
        settings.vector_store.controller_url = "http://127.0.0.1:9".to_string();

        let result = AppState::initialize_from(&paths, settings, |key| {
            (key == "GROQ_API_KEY").then(|| "gsk-key".to_string())
        })
        .await;

        match result {
            Err(InitializationError::MissingSecret(missing)) => {
                assert_eq!(missing.0, "PINECONE_API_KEY")
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("startup should halt"),
        }
    }

    #[test]
    fn missing_secret_message_names_the_key() {
        let err = InitializationError::from(crate::core::config::MissingSecret("GROQ_API_KEY"));
        assert_eq!(err.to_string(), "Error: GROQ_API_KEY is missing!");
    }
}
