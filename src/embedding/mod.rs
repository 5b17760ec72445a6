mod huggingface;
mod provider;

pub use huggingface::HuggingFaceEmbedder;
pub use provider::Embedder;
