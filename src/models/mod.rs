//! Business models: request/response schemas and domain entities.

pub mod academics;
pub mod auth;
pub mod common;
pub mod events;
pub mod students;
pub mod users;
pub mod values;

pub use common::response::{ErrorResponse, MessageResponse};

/// Process start instant, used for startup timing.
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
