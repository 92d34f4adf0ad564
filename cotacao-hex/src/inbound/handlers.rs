//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cotacao_types::{AppError, Bid, QuoteRepository, RateSource};

use crate::QuoteService;

/// Application state shared across handlers.
pub struct AppState<S: RateSource, R: QuoteRepository> {
    pub service: QuoteService<S, R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
///
/// Every application failure renders as an opaque 500 with an empty body:
/// callers learn nothing about the chain, the detail stays in the server log.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// `GET /cotacao` - fetch the current USD→BRL bid, persist it, return it as a
/// JSON string.
#[tracing::instrument(skip(state))]
pub async fn cotacao<S: RateSource, R: QuoteRepository>(
    State(state): State<Arc<AppState<S, R>>>,
) -> Result<Json<Bid>, ApiError> {
    match state.service.latest_quote().await {
        Ok(bid) => Ok(Json(bid)),
        Err(err) => {
            tracing::error!(error = %err, "cotacao request failed");
            Err(err.into())
        }
    }
}
