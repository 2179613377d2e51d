//! Response extraction: provider envelope → candidate score object.
//!
//! The model may wrap its JSON in explanatory prose, so after unwrapping the
//! envelope we take the substring between the first `{` and the last `}`
//! (inclusive) and parse that. Deliberately permissive — a best-effort
//! extractor, not a full parser — so minor formatting drift from the model
//! survives. Field contents are the validator's job, not ours.

use serde::Deserialize;
use serde_json::Value;

use crate::error::EvalError;

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    text: String,
}

/// Unwrap the `candidates[0].content.parts[0].text` envelope, then pull the
/// embedded JSON object out of the text. An unparseable envelope or an absent
/// text path is `MalformedEnvelope`; text with no usable `{...}` span is
/// `NoJsonFound`.
pub fn extract_candidate(raw_body: &str) -> Result<Value, EvalError> {
    let envelope: Envelope =
        serde_json::from_str(raw_body).map_err(|_| EvalError::MalformedEnvelope)?;
    let text = envelope
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or(EvalError::MalformedEnvelope)?;
    extract_json_span(text).ok_or(EvalError::NoJsonFound)
}

/// First-`{` / last-`}` heuristic over free text.
pub fn extract_json_span(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
