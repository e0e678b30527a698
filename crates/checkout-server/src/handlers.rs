//! HTTP Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use checkout_core::{
    backend::{capture_url, CREATE_ORDER_PATH},
    CheckoutError, CreateOrderRequest, SdkConfig,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub client_id_configured: bool,
    pub backend_url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn backend_unavailable(err: reqwest::Error) -> HandlerError {
    tracing::error!(error = %err, "Order backend request failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: "Order backend unavailable".into(),
            code: "BACKEND_UNAVAILABLE".into(),
        }),
    )
}

fn invalid_capture_target(err: CheckoutError) -> HandlerError {
    match err {
        CheckoutError::InvalidOrderId(_) => {
            tracing::warn!(error = %err, "Rejected capture request");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                    code: "INVALID_ORDER_ID".into(),
                }),
            )
        }
        err => {
            tracing::error!(error = %err, "Cannot build capture url");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Order backend unavailable".into(),
                    code: "BACKEND_UNAVAILABLE".into(),
                }),
            )
        }
    }
}

/// Pass the backend's status, content type and body through untouched
async fn relay(response: reqwest::Response) -> Result<Response, HandlerError> {
    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let body = response.bytes().await.map_err(backend_unavailable)?;

    if !status.is_success() {
        tracing::warn!(status = %status, "Order backend returned an error");
    }

    let mut relayed = (status, body).into_response();
    if let Some(content_type) = content_type {
        relayed.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }

    Ok(relayed)
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        client_id_configured: state.config.client_id_configured(),
        backend_url: state.config.backend_url.clone(),
    })
}

/// SDK configuration for the page
pub async fn sdk_config(State(state): State<AppState>) -> Json<SdkConfig> {
    Json(state.config.sdk.clone())
}

/// Forward order creation to the backend
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Response, HandlerError> {
    tracing::info!(
        amount = %payload.total_amount,
        payment_source = ?payload.payment_source,
        "Forwarding order creation"
    );

    let response = state
        .http
        .post(state.backend_url(CREATE_ORDER_PATH))
        .json(&payload)
        .send()
        .await
        .map_err(backend_unavailable)?;

    relay(response).await
}

/// Forward capture to the backend
pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Response, HandlerError> {
    tracing::info!(order_id = %order_id, "Forwarding capture");

    let url =
        capture_url(&state.config.backend_url, &order_id).map_err(invalid_capture_target)?;
    let response = state
        .http
        .post(url)
        .send()
        .await
        .map_err(backend_unavailable)?;

    relay(response).await
}
