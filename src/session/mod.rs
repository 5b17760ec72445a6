//! Per-browser-session chat state.

mod service;
mod store;
mod transcript;

pub use service::ChatService;
pub use store::{SessionStore, SharedTranscript};
pub use transcript::{Role, Transcript, TranscriptEntry};
