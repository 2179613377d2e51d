//! Remote scorer and the server-side orchestrator.
//!
//! The low-level transport does the *real* network call and is separated
//! behind a trait so the orchestrator can be exercised with stub transports
//! in tests. Exactly one attempt per evaluation — retries are a caller
//! policy, not built in here — and any failure class collapses into the
//! fallback substitution.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EvaluatorConfig;
use crate::error::EvalError;
use crate::evaluate::fallback::fallback_scores;
use crate::evaluate::{extract, validate, AnswerEvaluator};
use crate::prompt::build_evaluation_prompt;
use crate::score::{EvaluationRequest, ScoreSet};

/// Low-level model transport: prompt in, raw response body out.
pub trait ModelTransport: Send + Sync + 'static {
    fn call<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, EvalError>> + Send + 'a>>;
    /// Transport name for diagnostics.
    fn name(&self) -> &'static str;
}

pub type DynTransport = Arc<dyn ModelTransport>;

/// Gemini `generateContent` transport. Key goes into the query string, the
/// prompt into the request body alongside the generation parameters.
pub struct GeminiTransport {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiTransport {
    pub fn new(config: &EvaluatorConfig) -> Result<Self, EvalError> {
        let http = reqwest::Client::builder()
            .user_agent("interview-evaluator/0.1")
            .timeout(config.timeout)
            .build()
            .map_err(|e| EvalError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }
}

impl ModelTransport for GeminiTransport {
    fn call<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, EvalError>> + Send + 'a>> {
        Box::pin(async move {
            #[derive(Serialize)]
            struct Part<'a> {
                text: &'a str,
            }
            #[derive(Serialize)]
            struct Content<'a> {
                parts: Vec<Part<'a>>,
            }
            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct GenerationConfig {
                temperature: f32,
                max_output_tokens: u32,
            }
            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct Req<'a> {
                contents: Vec<Content<'a>>,
                generation_config: GenerationConfig,
            }

            let req = Req {
                contents: vec![Content {
                    parts: vec![Part { text: prompt }],
                }],
                generation_config: GenerationConfig {
                    temperature: self.temperature,
                    max_output_tokens: self.max_output_tokens,
                },
            };

            let resp = self
                .http
                .post(&self.api_url)
                .query(&[("key", self.api_key.as_str())])
                .json(&req)
                .send()
                .await
                .map_err(|e| EvalError::Transport(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(EvalError::Http(status.as_u16()));
            }
            resp.text()
                .await
                .map_err(|e| EvalError::Transport(e.to_string()))
        })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Server-side orchestrator: prompt → transport → extraction → validation,
/// with the fallback branch reachable from every step.
pub struct RemoteEvaluator {
    config: EvaluatorConfig,
    transport: DynTransport,
}

impl RemoteEvaluator {
    pub fn new(config: EvaluatorConfig) -> Result<Self, EvalError> {
        let transport = Arc::new(GeminiTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Inject a custom transport (stubs in tests, a stricter structured-output
    /// transport later without touching the orchestration).
    pub fn with_transport(config: EvaluatorConfig, transport: DynTransport) -> Self {
        Self { config, transport }
    }

    fn fall_back(&self, reason: &str) -> ScoreSet {
        warn!(reason, transport = self.transport.name(), "substituting fallback scores");
        counter!("evaluation_fallback_total").increment(1);
        fallback_scores(&self.config.fallback, reason)
    }

    async fn evaluate_impl(&self, request: &EvaluationRequest) -> ScoreSet {
        counter!("evaluations_total", "path" => "remote").increment(1);

        if !self.config.is_configured() {
            return self.fall_back(EvalError::Unconfigured.fallback_reason());
        }

        let prompt = build_evaluation_prompt(request.question(), request.answer());

        let raw = match self.transport.call(&prompt).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "remote scorer call failed");
                return self.fall_back(e.fallback_reason());
            }
        };

        let candidate = match extract::extract_candidate(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "response extraction failed");
                return self.fall_back(e.fallback_reason());
            }
        };

        match validate::to_score_set(&candidate) {
            Some(scores) => {
                debug!(
                    accuracy = scores.accuracy,
                    clarity = scores.clarity,
                    completeness = scores.completeness,
                    confidence = scores.confidence,
                    "remote evaluation accepted"
                );
                scores
            }
            None => self.fall_back(EvalError::SchemaInvalid.fallback_reason()),
        }
    }
}

#[async_trait::async_trait]
impl AnswerEvaluator for RemoteEvaluator {
    async fn evaluate(&self, request: &EvaluationRequest) -> ScoreSet {
        self.evaluate_impl(request).await
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
