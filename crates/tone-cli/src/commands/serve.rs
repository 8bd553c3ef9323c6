use crate::build_analyzer;
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tone_analyze::Analyzer;
use tone_core::{Analysis, ToneConfig};

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<Analyzer>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    text: Option<String>,
    score: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeBody {
    text: String,
}

pub fn run(config: &ToneConfig, host: &str, port: u16) -> Result<()> {
    let state = AppState {
        analyzer: Arc::new(build_analyzer(config)),
    };
    let addr = format!("{host}:{port}");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        tracing::info!(
            "Listening on http://{} (backend: {})",
            listener.local_addr()?,
            state.analyzer.backend()
        );
        axum::serve(listener, router(state)).await?;
        Ok(())
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", get(analyze_get).post(analyze_post))
        .route("/health", get(health))
        .with_state(state)
}

async fn analyze_get(State(state): State<AppState>, Query(query): Query<AnalyzeQuery>) -> Response {
    // Blank values count as absent.
    let Some(text) = query.text.filter(|t| !t.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing 'text' parameter").into_response();
    };
    let analysis = state.analyzer.analysis(&text);
    tracing::debug!(label = %analysis.label, score = analysis.score, "GET /analyze");

    if query.score.as_deref() == Some("1") {
        format!("{:.3}", analysis.score).into_response()
    } else {
        analysis.label.as_str().into_response()
    }
}

async fn analyze_post(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeBody>,
) -> Json<Analysis> {
    Json(state.analyzer.analysis(&body.text))
}

async fn health() -> &'static str {
    "ok"
}
