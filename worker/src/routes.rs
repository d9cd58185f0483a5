use crate::controller::health::routes::HealthRoutes;
use crate::controller::indexnow::routes::IndexNowRoutes;
use crate::state::AppState;
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::HeaderValue;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub struct Routes;

impl Routes {
    pub fn routes(app_state: AppState) -> Router {
        Router::new()
            .nest("/health", HealthRoutes::routes())
            .nest("/indexnow", IndexNowRoutes::routes())
            .with_state(app_state)
            .layer(SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")))
            .layer(SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS")))
            .layer(SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type")))
            .layer(CatchPanicLayer::new())
            .layer(TraceLayer::new_for_http())
    }
}
