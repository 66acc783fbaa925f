//! HTTP API
//!
//! - `POST /api/evaluate` evaluates `{"password": "..."}`
//! - `GET /api/suggest` returns a fresh suggestion
//! - `/static/*` serves front-end assets, everything else serves `index.html`

pub mod config;
pub mod logging;

pub use config::ServerConfig;

use axum::{
    Json, Router,
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::{EvaluationError, PasswordEvaluation, Strength, evaluate_password, generate_suggestion};

/// Request-level failures, rendered as `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Evaluation(EvaluationError::EmptyPassword) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Failures starting or running the server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub length_valid: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special: bool,
    pub has_common_pattern: bool,
    /// `None` (JSON `null`) when the estimate overflows.
    pub cracking_time_years: Option<f64>,
    pub cracking_time_text: String,
    pub strength: Strength,
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_password: Option<String>,
}

impl From<PasswordEvaluation> for EvaluateResponse {
    fn from(evaluation: PasswordEvaluation) -> Self {
        Self {
            length_valid: evaluation.criteria.length_valid,
            has_uppercase: evaluation.criteria.has_upper,
            has_lowercase: evaluation.criteria.has_lower,
            has_number: evaluation.criteria.has_number,
            has_special: evaluation.criteria.has_special,
            has_common_pattern: evaluation.has_common_pattern(),
            cracking_time_years: evaluation
                .cracking_time_years
                .is_finite()
                .then_some(evaluation.cracking_time_years),
            cracking_time_text: evaluation.cracking_time_text(),
            strength: evaluation.strength,
            reasons: evaluation.reasons(),
            suggested_password: evaluation
                .suggested_password
                .as_ref()
                .map(|s| s.expose_secret().to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub suggested_password: String,
}

/// Create the router with API routes and static file serving
pub fn create_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/api/evaluate", post(evaluate_handler))
        .route("/api/suggest", get(suggest_handler))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback_service(ServeFile::new(config.index_path()))
        .layer(TraceLayer::new_for_http())
}

/// Password evaluation endpoint handler
///
/// POST /api/evaluate
///
/// Returns 400 for a malformed body or an empty password.
pub async fn evaluate_handler(body: Bytes) -> Result<Json<EvaluateResponse>, ApiError> {
    let request: EvaluateRequest = serde_json::from_slice(&body).map_err(ApiError::InvalidBody)?;
    let password = SecretString::new(request.password.into());

    let evaluation = evaluate_password(&password).inspect_err(|e| {
        tracing::debug!(error = %e, "rejected evaluation request");
    })?;

    tracing::info!(strength = %evaluation.strength, "password evaluated");

    Ok(Json(evaluation.into()))
}

/// Suggestion endpoint handler
///
/// GET /api/suggest
pub async fn suggest_handler() -> Json<SuggestResponse> {
    let suggestion = generate_suggestion();
    Json(SuggestResponse {
        suggested_password: suggestion.expose_secret().to_string(),
    })
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(
        addr = %config.addr,
        static_dir = %config.static_dir.display(),
        "Starting server"
    );

    axum::serve(listener, create_router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
