use crate::infra::axum::JSON_CONTENT_TYPE;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use indexnow_relay::error::RelayError;
use serde_json::json;
use std::fmt;
use tracing::{error, info};

#[derive(Debug)]
pub struct AppError {
    pub status_code: StatusCode,
    pub cause: String,
    pub message: Option<String>,
}

impl AppError {
    pub fn new(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn method_not_allowed(method: &str) -> Self {
        Self {
            status_code: StatusCode::METHOD_NOT_ALLOWED,
            cause: format!("Method {method} is not allowed"),
            message: Some("Method Not Allowed. Use POST with a JSON body.".to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message.as_deref().unwrap_or(&self.cause),
        }));

        if self.status_code.is_server_error() {
            error!("{}", self.cause);
        } else if self.status_code.is_client_error() {
            info!("{}", self.cause);
        }

        (self.status_code, [(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response()
    }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl From<RelayError> for AppError {
    fn from(inner: RelayError) -> Self {
        Self {
            status_code: StatusCode::from_u16(inner.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            cause: inner.cause,
            message: inner.message,
        }
    }
}

#[cfg(test)]
mod test {
    use super::AppError;
    use axum::http::StatusCode;
    use indexnow_relay::error::RelayError;

    #[test]
    fn should_keep_client_error_status_from_relay_error() {
        let error = AppError::from(RelayError::bad_request("no urls", "Missing urls"));

        assert_eq!(StatusCode::BAD_REQUEST, error.status_code);
        assert_eq!(Some("Missing urls".to_string()), error.message);
    }

    #[test]
    fn should_map_unknown_status_to_internal_server_error() {
        let mut relay_error = RelayError::new("boom", "Failed");
        relay_error.status_code = 42;

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, AppError::from(relay_error).status_code);
    }
}
