pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

pub const DEFAULT_INDEX_NAME: &str = "healtcare-chatbot";
pub const DEFAULT_PINECONE_CONTROLLER_URL: &str = "https://api.pinecone.io";
pub const DEFAULT_PINECONE_API_VERSION: &str = "2024-07";
pub const DEFAULT_TEXT_KEY: &str = "text";

pub const DEFAULT_EMBEDDING_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";
pub const DEFAULT_EMBEDDING_BASE_URL: &str =
    "https://router.huggingface.co/hf-inference/models";

pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";

pub const DEFAULT_PAGE_TITLE: &str = "WELLMate ChatBot";
pub const DEFAULT_TAGLINE: &str = "Your health matters\u{2014}let\u{2019}s heal together!";
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Your Message:";

pub const DEFAULT_STYLESHEET: &str = "static/style.css";
pub const DEFAULT_LOGO_IMAGE: &str = "static/images/logo.svg";
pub const DEFAULT_BOT_AVATAR: &str = "static/images/bot-avatar.svg";
pub const DEFAULT_USER_AVATAR: &str = "static/images/user-avatar.svg";

pub fn default_local_origins() -> Vec<String> {
    vec![
        "http://localhost".to_string(),
        "http://localhost:8501".to_string(),
        "http://127.0.0.1".to_string(),
        "http://127.0.0.1:8501".to_string(),
    ]
}
