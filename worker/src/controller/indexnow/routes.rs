use crate::infra::axum::{AppJson, JSON_CONTENT_TYPE};
use crate::infra::error::AppError;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use indexnow_relay::notification_relay::NotificationRelay;
use indexnow_relay::notification_request::NotificationRequest;
use indexnow_relay::relay_summary::RelaySummary;
use tracing::info;

const ALLOWED_METHODS: &str = "POST, OPTIONS";

pub struct IndexNowRoutes;

impl IndexNowRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/", post(relay_handler).options(preflight_handler).fallback(method_not_allowed_handler))
    }
}

async fn relay_handler(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<AppJson<RelaySummary>, AppError> {
    info!("POST /indexnow");

    let request = NotificationRequest::from_body(&body)?;
    let summary = NotificationRelay::relay(&app_state.relay_state, request).await?;

    Ok(AppJson(summary))
}

async fn preflight_handler() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(CONTENT_TYPE, JSON_CONTENT_TYPE)])
}

async fn method_not_allowed_handler(method: Method) -> impl IntoResponse {
    ([(ALLOW, ALLOWED_METHODS)], AppError::method_not_allowed(method.as_str()))
}
