pub mod axum;
pub mod error;
