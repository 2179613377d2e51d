//! Evaluation prompt construction.
//!
//! The wording is rigid on purpose: the provider gives no structured-output
//! guarantee, so the prompt pins the exact field names and range the
//! validator expects downstream.

/// Pure function of its inputs; both texts are trimmed before embedding.
pub fn build_evaluation_prompt(question: &str, answer: &str) -> String {
    format!(
        "Evaluate the following interview answer and score it in PERCENTAGES.\n\n\
         Question: {}\n\n\
         Answer: {}\n\n\
         Return ONLY valid JSON in this exact format:\n\
         {{\n\
         \x20 \"accuracy\": number,\n\
         \x20 \"clarity\": number,\n\
         \x20 \"completeness\": number,\n\
         \x20 \"confidence\": number\n\
         }}\n\n\
         Do NOT include any text outside the JSON.\n\
         All values must be between 0 and 100.",
        question.trim(),
        answer.trim()
    )
}
