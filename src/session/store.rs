use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use super::transcript::Transcript;

/// One session's transcript. The async lock is held for a whole turn, so a
/// session never runs two pipelines at once.
pub type SharedTranscript = Arc<tokio::sync::Mutex<Transcript>>;

/// In-memory sessions keyed by id. Nothing is persisted; ending a session
/// drops its transcript.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SharedTranscript>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // every critical section is a single map operation; a poisoned map is still consistent
    fn sessions(&self) -> MutexGuard<'_, HashMap<String, SharedTranscript>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn create(&self) -> (String, SharedTranscript) {
        let session_id = Uuid::new_v4().to_string();
        let transcript = SharedTranscript::default();
        self.sessions().insert(session_id.clone(), transcript.clone());
        tracing::debug!("Session {} started", session_id);
        (session_id, transcript)
    }

    pub fn get(&self, session_id: &str) -> Option<SharedTranscript> {
        self.sessions().get(session_id).cloned()
    }

    /// Removes the session; returns whether it existed.
    pub fn end(&self, session_id: &str) -> bool {
        let removed = self.sessions().remove(session_id).is_some();
        if removed {
            tracing::debug!("Session {} ended", session_id);
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.sessions().len()
    }
}
