//! # Evaluator configuration
//! Read once at startup, immutable for the process lifetime, and passed into
//! the orchestrator explicitly so tests can inject fake configurations.

use std::env;
use std::time::Duration;

/// Gemini free-tier endpoint; override with `GEMINI_API_URL`.
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

fn default_timeout_secs() -> u64 {
    15
}
fn default_temperature() -> f32 {
    0.3
}
fn default_max_output_tokens() -> u32 {
    200
}

/// The four constants substituted whenever live evaluation cannot complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackScores {
    pub accuracy: f64,
    pub clarity: f64,
    pub completeness: f64,
    pub confidence: f64,
}

impl Default for FallbackScores {
    fn default() -> Self {
        Self {
            accuracy: 70.0,
            clarity: 70.0,
            completeness: 70.0,
            confidence: 70.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// `generateContent` endpoint URL.
    pub api_url: String,
    /// Empty string means unconfigured; the orchestrator falls back immediately.
    pub api_key: String,
    /// Hard bound on the single network call.
    pub timeout: Duration,
    /// Low temperature keeps the scoring JSON consistent across calls.
    pub temperature: f32,
    /// Only a short JSON object is expected back.
    pub max_output_tokens: u32,
    pub fallback: FallbackScores,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(default_timeout_secs()),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            fallback: FallbackScores::default(),
        }
    }
}

impl EvaluatorConfig {
    /// Build from environment variables, falling back to defaults field by
    /// field. Recognized: `GEMINI_API_KEY`, `GEMINI_API_URL`,
    /// `EVAL_TIMEOUT_SECS`, `EVAL_TEMPERATURE`, `EVAL_MAX_OUTPUT_TOKENS`,
    /// `FALLBACK_ACCURACY` / `_CLARITY` / `_COMPLETENESS` / `_CONFIDENCE`.
    pub fn from_env() -> Self {
        let defaults = FallbackScores::default();
        Self {
            api_url: env::var("GEMINI_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            timeout: Duration::from_secs(
                parse_env("EVAL_TIMEOUT_SECS").unwrap_or_else(default_timeout_secs),
            ),
            temperature: parse_env("EVAL_TEMPERATURE").unwrap_or_else(default_temperature),
            max_output_tokens: parse_env("EVAL_MAX_OUTPUT_TOKENS")
                .unwrap_or_else(default_max_output_tokens),
            fallback: FallbackScores {
                accuracy: parse_env("FALLBACK_ACCURACY").unwrap_or(defaults.accuracy),
                clarity: parse_env("FALLBACK_CLARITY").unwrap_or(defaults.clarity),
                completeness: parse_env("FALLBACK_COMPLETENESS").unwrap_or(defaults.completeness),
                confidence: parse_env("FALLBACK_CONFIDENCE").unwrap_or(defaults.confidence),
            },
        }
    }

    /// An empty (or whitespace) key means the remote path is unusable.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
