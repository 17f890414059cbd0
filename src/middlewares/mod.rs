mod rate_limit;
mod require_role;
mod require_session;

pub use rate_limit::RateLimit;
pub use require_role::RequireRole;
pub use require_session::RequireSession;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

use crate::models::ErrorResponse;

/// Error envelope shared by the auth middlewares.
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ErrorResponse::new(message)),
    }
}
