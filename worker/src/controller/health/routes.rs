use crate::infra::axum::AppJson;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use tracing::info;

pub struct HealthRoutes;

impl HealthRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/", get(health_handler))
    }
}

async fn health_handler() -> AppJson<HashMap<&'static str, &'static str>> {
    info!("GET /health");
    AppJson(HashMap::from([("status", "up")]))
}
