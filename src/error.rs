//! Error taxonomy for the evaluation pipeline.
//!
//! Every class except the two boundary rejections is absorbed by the
//! orchestrator and surfaced to callers only as `usedFallback=true` plus a
//! human-readable reason — upstream trouble never halts the interview flow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    /// Request boundary: question blank after trimming.
    #[error("question cannot be empty")]
    EmptyQuestion,
    /// Request boundary: answer blank after trimming.
    #[error("answer cannot be empty")]
    EmptyAnswer,
    /// No API key configured; the remote path is unusable.
    #[error("Gemini API key is not configured")]
    Unconfigured,
    /// DNS/connect/timeout failure before an HTTP status was obtained.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("http failure: status {0}")]
    Http(u16),
    /// Provider envelope unparseable or the expected text path was absent.
    #[error("malformed response envelope")]
    MalformedEnvelope,
    /// Model output held no `{...}` span to extract.
    #[error("no JSON object found in model output")]
    NoJsonFound,
    /// Candidate object failed schema/range validation.
    #[error("score payload failed validation")]
    SchemaInvalid,
}

impl EvalError {
    /// Reason string recorded on the substituted `ScoreSet`. Wording matches
    /// what the interview UI has always shown.
    pub fn fallback_reason(&self) -> &'static str {
        match self {
            EvalError::Unconfigured => "API not configured",
            EvalError::Transport(_) | EvalError::Http(_) => "API call failed",
            EvalError::MalformedEnvelope | EvalError::NoJsonFound | EvalError::SchemaInvalid => {
                "Invalid response format"
            }
            EvalError::EmptyQuestion | EvalError::EmptyAnswer => "invalid request",
        }
    }
}
