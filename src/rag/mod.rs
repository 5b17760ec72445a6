//! RAG (Retrieval-Augmented Generation) module.
//!
//! This module provides:
//! - `RagPipeline`: embeds a question, retrieves passages and asks the model
//! - `build_prompt`: stuffs retrieved passages into the fixed instruction
//! - `TurnOutcome`: typed answer-or-failure result of one turn

mod outcome;
mod pipeline;
mod prompt;

pub use outcome::{FailureKind, PipelineError, TurnOutcome};
pub use pipeline::{RagPipeline, ANSWER_TEMPERATURE, FALLBACK_ANSWER, TOP_K};
pub use prompt::{build_prompt, format_context, SYSTEM_PROMPT};
