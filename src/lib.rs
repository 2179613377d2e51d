// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod prompt;
pub mod questions;
pub mod score;
pub mod store;

// Evaluation pipeline (extraction, validation, fallback, remote + heuristic paths)
pub mod evaluate;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::{EvaluatorConfig, FallbackScores};
pub use crate::error::EvalError;
pub use crate::evaluate::{
    score_answer, AnswerEvaluator, DynEvaluator, HeuristicEvaluator, RemoteEvaluator,
};
pub use crate::score::{EvaluationRequest, ScoreSet};
