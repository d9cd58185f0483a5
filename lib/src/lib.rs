pub mod app_state;
pub mod environment;
pub mod error;
pub mod http_gateway;
pub mod indexnow_notification_service;
pub mod notification_relay;
pub mod relay_resources;
pub mod shutdown;

mod domain;

pub use domain::endpoint_result;
pub use domain::indexnow_payload;
pub use domain::key;
pub use domain::notification_request;
pub use domain::relay_summary;
