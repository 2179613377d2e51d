//! Score validation: fails closed on any missing field, non-numeric value,
//! or value outside `[0, 100]`. No partial acceptance, no clamping here.

use serde_json::Value;

use crate::score::ScoreSet;

pub const REQUIRED_FIELDS: [&str; 4] = ["accuracy", "clarity", "completeness", "confidence"];

/// True when `candidate` is an object carrying all four score fields, each
/// coercible to a real number in `[0, 100]`.
pub fn validate_scores(candidate: &Value) -> bool {
    let Some(map) = candidate.as_object() else {
        return false;
    };
    REQUIRED_FIELDS.iter().all(|field| {
        map.get(*field)
            .and_then(as_number)
            .is_some_and(|v| (0.0..=100.0).contains(&v))
    })
}

/// Validate and coerce in one step; `None` when validation fails.
pub fn to_score_set(candidate: &Value) -> Option<ScoreSet> {
    if !validate_scores(candidate) {
        return None;
    }
    let map = candidate.as_object()?;
    let get = |field: &str| map.get(field).and_then(as_number);
    Some(ScoreSet::new(
        get("accuracy")?,
        get("clarity")?,
        get("completeness")?,
        get("confidence")?,
    ))
}

/// JSON numbers plus numeric strings ("85" is as good as 85 to the model).
fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
