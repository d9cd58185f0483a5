pub mod health;
pub mod indexnow;
