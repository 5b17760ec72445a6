pub mod assets;
pub mod core;
pub mod embedding;
pub mod llm;
pub mod rag;
pub mod server;
pub mod session;
pub mod state;
pub mod vector;

#[cfg(test)]
pub(crate) mod testing;
