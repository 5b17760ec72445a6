use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Typed view of `config.yml`. Every field has a default, so an empty or
/// missing file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub vector_store: VectorStoreSettings,
    pub embedding: EmbeddingSettings,
    pub llm: LlmSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreSettings {
    pub index_name: String,
    pub controller_url: String,
    pub api_version: String,
    /// Metadata field holding the passage text.
    pub text_key: String,
    /// Data-plane host of the index. When set, startup skips the
    /// describe-index lookup on the controller.
    pub host: Option<String>,
}

impl Default for VectorStoreSettings {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            controller_url: DEFAULT_PINECONE_CONTROLLER_URL.to_string(),
            api_version: DEFAULT_PINECONE_API_VERSION.to_string(),
            text_key: DEFAULT_TEXT_KEY.to_string(),
            host: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    pub model: String,
    pub base_url: String,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: DEFAULT_EMBEDDING_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model: String,
    pub base_url: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_LLM_MODEL.to_string(),
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub title: String,
    pub tagline: String,
    pub input_placeholder: String,
    pub stylesheet: String,
    pub logo: String,
    pub bot_avatar: String,
    pub user_avatar: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            logo: DEFAULT_LOGO_IMAGE.to_string(),
            bot_avatar: DEFAULT_BOT_AVATAR.to_string(),
            user_avatar: DEFAULT_USER_AVATAR.to_string(),
        }
    }
}

impl ServerSettings {
    pub fn allowed_origins(&self) -> Vec<String> {
        let origins: Vec<String> = self
            .cors_allowed_origins
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return default_local_origins();
        }
        origins
    }
}
