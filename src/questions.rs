//! Question bank: per-field interview questions with per-question keyword
//! lists, embedded at build time. Keywords are consumed only by the heuristic
//! path; `keywords[i]` belongs to `questions[i]`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static BANK: Lazy<Vec<FieldBank>> = Lazy::new(|| {
    let raw = include_str!("../questions.json");
    let bank: Vec<FieldBank> = serde_json::from_str(raw).expect("valid question bank");
    for fb in &bank {
        assert_eq!(
            fb.questions.len(),
            fb.keywords.len(),
            "keyword lists must be indexed per question ({})",
            fb.field
        );
    }
    bank
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldBank {
    pub field: String,
    pub questions: Vec<String>,
    pub keywords: Vec<Vec<String>>,
}

/// All field names in the bank, in file order.
pub fn fields() -> Vec<&'static str> {
    BANK.iter().map(|fb| fb.field.as_str()).collect()
}

/// Case-insensitive lookup of a field's question/keyword bank.
pub fn bank_for(field: &str) -> Option<&'static FieldBank> {
    BANK.iter().find(|fb| fb.field.eq_ignore_ascii_case(field))
}

/// Keyword list for question `index` within `field`.
pub fn keywords_for(field: &str, index: usize) -> Option<&'static [String]> {
    bank_for(field)?.keywords.get(index).map(Vec::as_slice)
}
