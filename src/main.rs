//! Interview Evaluator — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the remote evaluator, result store,
//! and Prometheus metrics.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use interview_evaluator::metrics::Metrics;
use interview_evaluator::{api, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("interview_evaluator=info,warn"));

    // try_init: the Shuttle runtime may have installed a subscriber already.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let state = AppState::from_env()?;

    let metrics = Metrics::init();
    let router = api::router(state).merge(metrics.router());

    Ok(router.into())
}
