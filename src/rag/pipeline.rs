use std::sync::Arc;

use super::outcome::{PipelineError, TurnOutcome};
use super::prompt::build_prompt;
use crate::embedding::Embedder;
use crate::llm::{ChatRequest, LlmProvider};
use crate::vector::VectorStore;

/// Number of passages retrieved per question.
pub const TOP_K: usize = 3;

/// Sampling temperature for answers.
pub const ANSWER_TEMPERATURE: f64 = 0.0;

/// Answer used when the model response carries no content.
pub const FALLBACK_ANSWER: &str = "I'm sorry, I couldn't find an answer to that.";

/// Embed → retrieve → prompt → complete, one pass per question.
#[derive(Clone)]
pub struct RagPipeline {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn VectorStore>,
    llm: Arc<dyn LlmProvider>,
}

impl RagPipeline {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        store: Arc<dyn VectorStore>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            embedder,
            store,
            llm,
        }
    }

    pub fn embedder(&self) -> &dyn Embedder {
        self.embedder.as_ref()
    }

    pub fn store(&self) -> &dyn VectorStore {
        self.store.as_ref()
    }

    pub fn llm(&self) -> &dyn LlmProvider {
        self.llm.as_ref()
    }

    /// Runs the chain for one question. Every failure is folded into the
    /// returned outcome.
    pub async fn answer(&self, question: &str) -> TurnOutcome {
        match self.run(question).await {
            Ok(answer) => TurnOutcome::Answer(answer),
            Err(err) => {
                tracing::warn!("RAG pipeline failed at {:?} stage: {}", err.kind(), err);
                err.into()
            }
        }
    }

    async fn run(&self, question: &str) -> Result<String, PipelineError> {
        let embedding = self
            .embedder
            .embed(question)
            .await
            .map_err(PipelineError::Embedding)?;

        let passages = self
            .store
            .search(&embedding, TOP_K)
            .await
            .map_err(PipelineError::Retrieval)?;
        tracing::debug!(
            "Retrieved {} passages from '{}'",
            passages.len(),
            self.store.index_name()
        );

        let request =
            ChatRequest::new(build_prompt(question, &passages)).with_temperature(ANSWER_TEMPERATURE);
        let answer = self
            .llm
            .chat(request)
            .await
            .map_err(PipelineError::Completion)?;

        Ok(answer.unwrap_or_else(|| FALLBACK_ANSWER.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rag::FailureKind;
    use crate::testing::{FakeEmbedder, FakeLlm, FakeStore};

    fn pipeline(embedder: FakeEmbedder, store: FakeStore, llm: FakeLlm) -> RagPipeline {
        RagPipeline::new(Arc::new(embedder), Arc::new(store), Arc::new(llm))
    }

    #[tokio::test]
    async fn answers_with_model_output() {
        let store = FakeStore::with_passages(&["Iron deficiency causes anemia."]);
        let llm = FakeLlm::answering("Anemia is a low red cell count.");
        let pipeline = pipeline(FakeEmbedder::ok(), store, llm.clone());

        let outcome = pipeline.answer("What is anemia?").await;
        assert_eq!(
            outcome,
            TurnOutcome::Answer("Anemia is a low red cell count.".to_string())
        );

        let request = llm.last_request().expect("llm was called");
        assert_eq!(request.temperature, Some(0.0));
        assert!(request.messages[0]
            .content
            .contains("Iron deficiency causes anemia."));
        assert_eq!(request.messages[1].content, "What is anemia?");
    }

    #[tokio::test]
    async fn retrieval_always_requests_three_passages() {
        let store = FakeStore::with_passages(&["a", "b", "c", "d"]);
        let pipeline = pipeline(FakeEmbedder::ok(), store.clone(), FakeLlm::answering("ok"));

        let long_question = "symptom ".repeat(500);
        for question in ["flu?", long_question.as_str(), "   ", "¿Qué es la diabetes?"] {
            pipeline.answer(question).await;
        }

        assert_eq!(store.requested_top_k(), vec![3, 3, 3, 3]);
    }

    #[tokio::test]
    async fn missing_answer_uses_fallback_verbatim() {
        let pipeline = pipeline(
            FakeEmbedder::ok(),
            FakeStore::with_passages(&["x"]),
            FakeLlm::without_answer(),
        );

        let outcome = pipeline.answer("Is coffee healthy?").await;
        assert_eq!(
            outcome.display_text(),
            "I'm sorry, I couldn't find an answer to that."
        );
    }

    #[tokio::test]
    async fn embedding_failure_stops_before_retrieval() {
        let store = FakeStore::with_passages(&["x"]);
        let llm = FakeLlm::answering("unused");
        let pipeline = pipeline(
            FakeEmbedder::failing("connection refused"),
            store.clone(),
            llm.clone(),
        );

        let outcome = pipeline.answer("Headache remedies?").await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Embedding));
        let text = outcome.display_text();
        assert!(text.starts_with("Error:"));
        assert!(text.contains("connection refused"));
        assert!(store.requested_top_k().is_empty());
        assert!(llm.last_request().is_none());
    }

    #[tokio::test]
    async fn retrieval_failure_is_reported_with_original_text() {
        let llm = FakeLlm::answering("unused");
        let pipeline = pipeline(
            FakeEmbedder::ok(),
            FakeStore::failing("index healtcare-chatbot not found"),
            llm.clone(),
        );

        let outcome = pipeline.answer("Back pain?").await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Retrieval));
        assert!(outcome.display_text().starts_with("Error:"));
        assert!(outcome
            .display_text()
            .contains("index healtcare-chatbot not found"));
        assert!(llm.last_request().is_none());
    }

    #[tokio::test]
    async fn completion_failure_becomes_failure_outcome() {
        let pipeline = pipeline(
            FakeEmbedder::ok(),
            FakeStore::with_passages(&["x"]),
            FakeLlm::failing("rate limit exceeded"),
        );

        let outcome = pipeline.answer("Fever?").await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Completion));
        assert!(outcome.display_text().contains("rate limit exceeded"));
    }
}
