//! Heuristic scorer: the client-side path. Computes all four scores from the
//! answer text and a per-question keyword list in a single pass, no network.
//!
//! Magnitudes are jittered (repeated calls on identical input differ) but the
//! structure is fixed: completeness is fully deterministic, accuracy always
//! lands inside its match-ratio bucket. The RNG is injected so tests can seed
//! it and assert exact boundary values.

use metrics::counter;
use rand::Rng;

use crate::evaluate::AnswerEvaluator;
use crate::score::{EvaluationRequest, ScoreSet};

/// Score an answer against its keyword list.
///
/// Accuracy buckets by matched-keyword ratio:
/// >=0.75 → 85–95, >=0.50 → 70–80, >=0.25 → 55–70, >0 → 40–55, =0 → 25–40.
/// An empty keyword list keeps the base accuracy of 40 with no jitter.
pub fn score_answer<R: Rng + ?Sized>(answer: &str, keywords: &[String], rng: &mut R) -> ScoreSet {
    let answer_lower = answer.to_lowercase();
    let word_count = answer.split_whitespace().count();
    // A terminator-less answer still counts as one sentence.
    let sentence_count = answer
        .chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
        .max(1);
    let char_count = answer.chars().count();

    let matched = keywords
        .iter()
        .filter(|k| answer_lower.contains(&k.to_lowercase()))
        .count();

    let accuracy = if keywords.is_empty() {
        40.0
    } else {
        let match_ratio = matched as f64 / keywords.len() as f64;
        if match_ratio >= 0.75 {
            85.0 + rng.random_range(0.0..10.0)
        } else if match_ratio >= 0.50 {
            70.0 + rng.random_range(0.0..10.0)
        } else if match_ratio >= 0.25 {
            55.0 + rng.random_range(0.0..15.0)
        } else if match_ratio > 0.0 {
            40.0 + rng.random_range(0.0..15.0)
        } else {
            25.0 + rng.random_range(0.0..15.0)
        }
    };

    let mut clarity = 50.0 + (sentence_count as f64 * 15.0).min(50.0);
    if word_count > 100 {
        clarity = (clarity + 10.0).min(100.0);
    }

    let completeness = ((char_count as f64 / 200.0) * 100.0).floor().min(100.0);

    let mut confidence: f64 = 60.0 + rng.random_range(0.0..30.0);
    // NOTE: with no keywords this is 0 >= 0, so the bonus always applies.
    // Long-standing behavior, kept until product review settles it.
    if matched as f64 >= keywords.len() as f64 * 0.5 {
        confidence = (confidence + 15.0).min(100.0);
    }

    ScoreSet::new(accuracy, clarity, completeness, confidence)
}

/// Client-path implementation of the capability interface; draws jitter from
/// the thread-local RNG.
pub struct HeuristicEvaluator;

#[async_trait::async_trait]
impl AnswerEvaluator for HeuristicEvaluator {
    async fn evaluate(&self, request: &EvaluationRequest) -> ScoreSet {
        counter!("evaluations_total", "path" => "heuristic").increment(1);
        score_answer(request.answer(), request.keywords(), &mut rand::rng())
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
