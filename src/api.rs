//! HTTP surface for the interview evaluator. Thin transport plumbing over
//! the evaluation pipeline: request parsing, CORS, and the JSON envelope the
//! interview UI expects (`{ success, evaluation, timestamp }`).

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use serde_json::{json, Value};
use shuttle_axum::axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::config::EvaluatorConfig;
use crate::evaluate::{DynEvaluator, HeuristicEvaluator, RemoteEvaluator};
use crate::questions;
use crate::score::{EvaluationRequest, ScoreSet};
use crate::store::ResultStore;

#[derive(Clone)]
pub struct AppState {
    evaluator: DynEvaluator,
    heuristic: DynEvaluator,
    store: Arc<ResultStore>,
}

impl AppState {
    pub fn new(evaluator: DynEvaluator, store: Arc<ResultStore>) -> Self {
        Self {
            evaluator,
            heuristic: Arc::new(HeuristicEvaluator),
            store,
        }
    }

    /// Wire the production evaluator from process configuration.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = EvaluatorConfig::from_env();
        // Safe diagnostics: never log the key itself.
        tracing::info!(
            configured = config.is_configured(),
            key_len = config.api_key.len(),
            timeout_secs = config.timeout.as_secs(),
            "evaluator config loaded"
        );
        let remote = RemoteEvaluator::new(config).context("building the remote evaluator")?;
        Ok(Self::new(Arc::new(remote), Arc::new(ResultStore::default())))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/evaluate", post(evaluate))
        .route("/api/evaluate-local", post(evaluate_local))
        .route("/api/questions", get(question_bank))
        .route("/api/results", post(store_result).get(get_results))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct EvaluateReq {
    question: String,
    answer: String,
}

#[derive(serde::Deserialize)]
struct EvaluateLocalReq {
    /// Optional on this path; the heuristic scorer never reads it.
    #[serde(default)]
    question: Option<String>,
    answer: String,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(serde::Deserialize)]
struct StoreReq {
    #[serde(rename = "userId")]
    user_id: u64,
    question: String,
    answer: String,
    scores: ScoreSet,
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": message })),
    )
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn evaluation_envelope(evaluation: &ScoreSet) -> Json<Value> {
    Json(json!({
        "success": true,
        "evaluation": evaluation,
        "timestamp": timestamp(),
    }))
}

/// Server path: remote scorer with fallback substitution.
async fn evaluate(
    State(state): State<AppState>,
    Json(body): Json<EvaluateReq>,
) -> Result<Json<Value>, ApiError> {
    let request = EvaluationRequest::new(&body.question, &body.answer)
        .map_err(|e| bad_request(&e.to_string()))?;
    let evaluation = state.evaluator.evaluate(&request).await;
    Ok(evaluation_envelope(&evaluation))
}

/// Client path: lexical heuristics, no network dependency.
async fn evaluate_local(
    State(state): State<AppState>,
    Json(body): Json<EvaluateLocalReq>,
) -> Result<Json<Value>, ApiError> {
    let question = body.question.unwrap_or_else(|| "unspecified".to_string());
    let request = EvaluationRequest::with_keywords(&question, &body.answer, body.keywords)
        .map_err(|e| bad_request(&e.to_string()))?;
    let evaluation = state.heuristic.evaluate(&request).await;
    Ok(evaluation_envelope(&evaluation))
}

/// Question bank lookup: field list by default, one field's bank via `?field=`.
async fn question_bank(Query(q): Query<HashMap<String, String>>) -> Result<Json<Value>, ApiError> {
    match q.get("field") {
        Some(field) => match questions::bank_for(field) {
            Some(bank) => Ok(Json(json!({ "success": true, "bank": bank }))),
            None => Err(bad_request("Unknown field")),
        },
        None => Ok(Json(json!({ "success": true, "fields": questions::fields() }))),
    }
}

async fn store_result(
    State(state): State<AppState>,
    Json(body): Json<StoreReq>,
) -> Result<Json<Value>, ApiError> {
    let question = body.question.trim();
    let answer = body.answer.trim();
    if question.is_empty() || answer.is_empty() {
        return Err(bad_request("Question and answer cannot be empty"));
    }
    if !body.scores.in_range() {
        return Err(bad_request("Invalid scores structure"));
    }

    let result_id = state.store.insert(body.user_id, question, answer, body.scores);
    Ok(Json(json!({
        "success": true,
        "message": "Result stored successfully",
        "resultId": result_id,
    })))
}

async fn get_results(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let user_id: u64 = q
        .get("user_id")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| bad_request("user_id is required"))?;
    if user_id == 0 {
        return Err(bad_request("Invalid user_id"));
    }

    let results = state.store.results_for(user_id);
    Ok(Json(json!({ "success": true, "results": results })))
}
