//! # Score model
//! The four-field percentage result shared by both evaluation paths, plus the
//! validated request that enters them.
//!
//! Invariant: a `ScoreSet` handed to a caller always carries all four primary
//! fields, each in `[0, 100]` — never partial.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Evaluation result. `used_fallback`/`fallback_reason` are only populated
/// when the configured constants were substituted for a live evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub accuracy: f64,
    pub clarity: f64,
    pub completeness: f64,
    pub confidence: f64,
    #[serde(rename = "usedFallback", default, skip_serializing_if = "is_false")]
    pub used_fallback: bool,
    #[serde(rename = "fallbackReason", default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl ScoreSet {
    /// Build a live (non-fallback) result, clamping each field independently.
    pub fn new(accuracy: f64, clarity: f64, completeness: f64, confidence: f64) -> Self {
        Self {
            accuracy: clamp_score(accuracy),
            clarity: clamp_score(clarity),
            completeness: clamp_score(completeness),
            confidence: clamp_score(confidence),
            used_fallback: false,
            fallback_reason: None,
        }
    }

    /// True when all four primary fields sit inside `[0, 100]`.
    pub fn in_range(&self) -> bool {
        [self.accuracy, self.clarity, self.completeness, self.confidence]
            .iter()
            .all(|v| (0.0..=100.0).contains(v))
    }
}

/// Clamp a raw score into the closed interval `[0, 100]`.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// A question/answer pair accepted for evaluation. Construction trims both
/// texts and rejects empties, so scoring logic never sees a blank input.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    question: String,
    answer: String,
    keywords: Vec<String>,
}

impl EvaluationRequest {
    pub fn new(question: &str, answer: &str) -> Result<Self, EvalError> {
        Self::with_keywords(question, answer, Vec::new())
    }

    /// Keywords are used only by the heuristic path; the remote path ignores them.
    pub fn with_keywords(
        question: &str,
        answer: &str,
        keywords: Vec<String>,
    ) -> Result<Self, EvalError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(EvalError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(EvalError::EmptyAnswer);
        }
        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            keywords,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
