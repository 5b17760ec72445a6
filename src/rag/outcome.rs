use serde::Serialize;
use thiserror::Error;

use crate::core::errors::ClientError;

/// Stage of the pipeline that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Embedding,
    Retrieval,
    Completion,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Embedding(#[source] ClientError),
    #[error("{0}")]
    Retrieval(#[source] ClientError),
    #[error("{0}")]
    Completion(#[source] ClientError),
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::Embedding(_) => FailureKind::Embedding,
            PipelineError::Retrieval(_) => FailureKind::Retrieval,
            PipelineError::Completion(_) => FailureKind::Completion,
        }
    }
}

/// Result of one question/answer turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Answer(String),
    Failure { kind: FailureKind, message: String },
}

impl TurnOutcome {
    /// Text shown as the assistant's turn.
    pub fn display_text(&self) -> String {
        match self {
            TurnOutcome::Answer(text) => text.clone(),
            TurnOutcome::Failure { message, .. } => format!("Error: {}", message),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            TurnOutcome::Answer(_) => None,
            TurnOutcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl From<PipelineError> for TurnOutcome {
    fn from(err: PipelineError) -> Self {
        TurnOutcome::Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
