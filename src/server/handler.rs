//! The correction endpoint.
//!
//! - POST {route}: correct a student's answer
//! - GET /health

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::config::{ApiKey, Config};
use crate::correction::prompt::{build_prompt, NO_CORRECTION_FALLBACK};
use crate::correction::types::{CorrectionRequest, CorrectionResult};
use crate::server::error::ApiError;
use crate::upstream::gemini::GeminiClient;

/// Application state shared across handlers. Read-only after startup.
pub struct AppState {
    pub config: Arc<Config>,
    pub api_key: Option<ApiKey>,
    pub gemini: GeminiClient,
    pub start_time: Instant,
}

/// Build the axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route(
            &state.config.server.route,
            post(correct).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http());

    if state.config.server.cors_allow_any_origin {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub credential_configured: bool,
}

async fn correct(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<CorrectionResult>, ApiError> {
    let api_key = state.api_key.as_ref().ok_or(ApiError::MissingCredential)?;

    // Read here rather than through an extractor so the credential guard runs first.
    let limit = state.config.server.max_body_bytes;
    let body: Bytes = axum::body::to_bytes(request.into_body(), limit)
        .await
        .map_err(|_| ApiError::BodyTooLarge(limit))?;
    let request = CorrectionRequest::parse(&body).ok_or(ApiError::MissingText)?;

    let request_id = Uuid::new_v4().to_string();
    info!(
        request_id = request_id,
        chars = request.texto.chars().count(),
        "Correction request"
    );

    let prompt = build_prompt(&request.texto);
    let text = state.gemini.generate(api_key, &prompt).await?;

    let resultado = text.unwrap_or_else(|| NO_CORRECTION_FALLBACK.to_string());
    info!(request_id = request_id, chars = resultado.chars().count(), "Correction ready");

    Ok(Json(CorrectionResult::Success { resultado }))
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        credential_configured: state.api_key.is_some(),
    })
}
