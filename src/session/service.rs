use super::transcript::Transcript;
use crate::rag::{RagPipeline, TurnOutcome};

/// Runs turns against a session transcript.
#[derive(Clone)]
pub struct ChatService {
    pipeline: RagPipeline,
}

impl ChatService {
    pub fn new(pipeline: RagPipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &RagPipeline {
        &self.pipeline
    }

    /// Appends the question, runs the pipeline and appends the reply (the
    /// outcome's display text). Both turns are recorded even when the
    /// pipeline fails.
    pub async fn submit(&self, transcript: &mut Transcript, question: &str) -> TurnOutcome {
        transcript.push_user(question);
        let outcome = self.pipeline.answer(question).await;
        transcript.push_assistant(outcome.display_text());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::Role;
    use crate::testing::{FakeEmbedder, FakeLlm, FakeStore};

    fn service(embedder: FakeEmbedder) -> ChatService {
        ChatService::new(RagPipeline::new(
            Arc::new(embedder),
            Arc::new(FakeStore::with_passages(&["Hydration helps."])),
            Arc::new(FakeLlm::answering("Drink more water.")),
        ))
    }

    #[tokio::test]
    async fn n_submissions_yield_2n_alternating_entries() {
        let service = service(FakeEmbedder::ok());
        let mut transcript = Transcript::new();
        let questions = ["first?", "second?", "third?", "fourth?"];

        for question in questions {
            service.submit(&mut transcript, question).await;
        }

        assert_eq!(transcript.len(), 2 * questions.len());
        for (idx, pair) in transcript.entries().chunks(2).enumerate() {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[0].content, questions[idx]);
            assert_eq!(pair[1].role, Role::Assistant);
            assert_eq!(pair[1].content, "Drink more water.");
        }
    }

    #[tokio::test]
    async fn failures_are_recorded_and_later_turns_continue() {
        let failing = service(FakeEmbedder::failing("dns error"));
        let working = service(FakeEmbedder::ok());
        let mut transcript = Transcript::new();

        let outcome = failing.submit(&mut transcript, "Is it broken?").await;
        assert!(outcome.failure_kind().is_some());
        working.submit(&mut transcript, "And now?").await;

        let entries = transcript.entries();
        assert_eq!(entries.len(), 4);
        assert!(entries[1].content.starts_with("Error:"));
        assert!(entries[1].content.contains("dns error"));
        assert_eq!(entries[3].content, "Drink more water.");
    }
}
