// src/evaluate/mod.rs
//! Evaluation pipeline: the capability interface both paths implement, the
//! remote orchestrator, and the local heuristic scorer.

pub mod extract;
pub mod fallback;
pub mod heuristic;
pub mod remote;
pub mod validate;

use std::sync::Arc;

use crate::score::{EvaluationRequest, ScoreSet};

// Re-export convenient types.
pub use fallback::fallback_scores;
pub use heuristic::{score_answer, HeuristicEvaluator};
pub use remote::{GeminiTransport, ModelTransport, RemoteEvaluator};

/// One capability, two implementations (remote and heuristic), so callers and
/// tests stay agnostic to which path is active.
///
/// `evaluate` is infallible by contract: invalid inputs are rejected at
/// `EvaluationRequest` construction, and every upstream failure inside the
/// remote path is absorbed into a fallback `ScoreSet`.
#[async_trait::async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn evaluate(&self, request: &EvaluationRequest) -> ScoreSet;
    /// Implementation name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Alias used by handlers and bootstrap code.
pub type DynEvaluator = Arc<dyn AnswerEvaluator>;
