//! In-process stand-ins for the hosted services, shared by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::errors::ClientError;
use crate::embedding::Embedder;
use crate::llm::{ChatRequest, LlmProvider};
use crate::vector::{RetrievedPassage, VectorStore};

fn failure(service: &'static str, message: &str) -> ClientError {
    ClientError::invalid(service, message)
}

#[derive(Clone)]
pub struct FakeEmbedder {
    error: Option<String>,
}

impl FakeEmbedder {
    pub fn ok() -> Self {
        Self { error: None }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl Embedder for FakeEmbedder {
    fn model(&self) -> &str {
        "fake-embedder"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ClientError> {
        match &self.error {
            Some(message) => Err(failure("huggingface", message)),
            None => Ok(vec![text.len() as f32, 1.0, 0.0]),
        }
    }
}

#[derive(Clone)]
pub struct FakeStore {
    passages: Vec<RetrievedPassage>,
    error: Option<String>,
    requests: Arc<Mutex<Vec<usize>>>,
}

impl FakeStore {
    pub fn with_passages(texts: &[&str]) -> Self {
        let passages = texts
            .iter()
            .enumerate()
            .map(|(idx, text)| RetrievedPassage {
                id: format!("doc-{}", idx),
                text: text.to_string(),
                score: 1.0 - idx as f32 * 0.1,
                source: None,
            })
            .collect();
        Self {
            passages,
            error: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::with_passages(&[])
        }
    }

    /// `top_k` of every search seen so far.
    pub fn requested_top_k(&self) -> Vec<usize> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl VectorStore for FakeStore {
    fn index_name(&self) -> &str {
        "fake-index"
    }

    async fn search(
        &self,
        _embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<RetrievedPassage>, ClientError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(top_k);
        }
        match &self.error {
            Some(message) => Err(failure("pinecone", message)),
            None => Ok(self.passages.iter().take(top_k).cloned().collect()),
        }
    }
}

#[derive(Clone)]
pub struct FakeLlm {
    answer: Option<String>,
    error: Option<String>,
    last_request: Arc<Mutex<Option<ChatRequest>>>,
}

impl FakeLlm {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            error: None,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn without_answer() -> Self {
        Self {
            answer: None,
            ..Self::answering("")
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::answering("")
        }
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().ok().and_then(|r| r.clone())
    }
}

#[async_trait]
impl LlmProvider for FakeLlm {
    fn name(&self) -> &str {
        "fake"
    }

    fn model(&self) -> &str {
        "fake-model"
    }

    async fn chat(&self, request: ChatRequest) -> Result<Option<String>, ClientError> {
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request);
        }
        match &self.error {
            Some(message) => Err(failure("groq", message)),
            None => Ok(self.answer.clone()),
        }
    }
}
