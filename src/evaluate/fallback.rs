//! Fallback policy: the configured constants, verbatim, tagged with a reason.
//! This is what keeps the orchestrator's "always returns a usable ScoreSet"
//! contract intact regardless of upstream availability.

use crate::config::FallbackScores;
use crate::score::ScoreSet;

pub fn fallback_scores(constants: &FallbackScores, reason: &str) -> ScoreSet {
    ScoreSet {
        accuracy: constants.accuracy,
        clarity: constants.clarity,
        completeness: constants.completeness,
        confidence: constants.confidence,
        used_fallback: true,
        fallback_reason: Some(reason.to_string()),
    }
}
