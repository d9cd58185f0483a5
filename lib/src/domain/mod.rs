pub mod endpoint_result;
pub mod indexnow_payload;
pub mod key;
pub mod notification_request;
pub mod relay_summary;
