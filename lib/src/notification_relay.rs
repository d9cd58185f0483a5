use crate::app_state::AppState;
use crate::error::RelayError;
use crate::indexnow_notification_service::IndexNowNotificationService;
use crate::indexnow_payload::{infer_host, IndexNowPayload};
use crate::key::mask_key;
use crate::notification_request::NotificationRequest;
use crate::relay_summary::{ReceivedNotification, RelaySummary};
use tracing::instrument;
use tracing::info;

pub struct NotificationRelay;

impl NotificationRelay {
    /// Validates the request and fans it out to every configured endpoint.
    ///
    /// Fails only when the request itself is unusable. Endpoint failures are
    /// reported inside the summary.
    #[instrument(skip_all, name = "relay_notification")]
    pub async fn relay(
        app_state: &AppState,
        request: NotificationRequest,
    ) -> Result<RelaySummary, RelayError> {
        request.validate()?;

        let host = request.urls.first().map(|url| infer_host(url)).unwrap_or_default();
        let key = request.key.unwrap_or_else(|| app_state.resources.default_key.clone());
        let key_location = request.key_location.unwrap_or_else(|| app_state.resources.default_key_location.clone());

        info!(
            "Relaying {} urls for host '{}' to {} IndexNow endpoints",
            request.urls.len(),
            host,
            app_state.resources.endpoints.len()
        );

        let payload = IndexNowPayload::new(&host, &key, &key_location, request.urls);

        let results = IndexNowNotificationService::send(app_state, &payload).await?;

        let received = ReceivedNotification {
            urls: payload.url_list,
            key_used: mask_key(&key),
            key_location,
            host,
        };

        Ok(RelaySummary::new(received, results))
    }
}
