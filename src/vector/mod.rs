//! Read-only access to the hosted passage index.

mod pinecone;
mod store;

pub use pinecone::PineconeIndex;
pub use store::{RetrievedPassage, VectorStore};
