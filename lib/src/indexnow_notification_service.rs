use crate::app_state::AppState;
use crate::endpoint_result::EndpointResult;
use crate::error::RelayError;
use crate::indexnow_payload::IndexNowPayload;
use futures::future::join_all;
use reqwest::header::CONTENT_TYPE;
use std::collections::BTreeMap;
use tracing::instrument;
use tracing::{error, info};

pub struct IndexNowNotificationService;

impl IndexNowNotificationService {
    /// Posts the payload to every configured endpoint at once and waits for all of them to settle.
    /// Every endpoint gets exactly one entry in the returned map.
    #[instrument(skip_all, name = "send_to_indexnow")]
    pub async fn send(
        app_state: &AppState,
        payload: &IndexNowPayload,
    ) -> Result<BTreeMap<String, EndpointResult>, RelayError> {
        let body = payload.to_body()?;

        let deliveries = app_state.resources.endpoints.iter().map(|endpoint| Self::notify(app_state, endpoint, body.clone()));

        Ok(join_all(deliveries).await.into_iter().collect())
    }

    async fn notify(
        app_state: &AppState,
        endpoint: &str,
        body: Vec<u8>,
    ) -> (String, EndpointResult) {
        let result = app_state
            .http_gateway
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await;

        let endpoint_result = match result {
            Ok(response) => {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();

                if status.is_success() {
                    info!("IndexNow endpoint {} answered with status {}", endpoint, status);
                } else {
                    error!("IndexNow endpoint {} answered with status {} and body {}", endpoint, status, text);
                }

                EndpointResult::delivered(status.as_u16(), status.canonical_reason().unwrap_or_default(), &text, app_state.resources.response_body_limit)
            },
            Err(error) => {
                error!("Failed to send IndexNow notification to {} cause {}", endpoint, error);
                EndpointResult::failed(&error.to_string())
            },
        };

        (endpoint.to_string(), endpoint_result)
    }
}
