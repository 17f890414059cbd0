use actix_web::{Error, HttpRequest, HttpResponse, error};

use crate::models::ErrorResponse;

/// 400 with the JSON error envelope when body deserialization fails.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Invalid request payload: {detail}"
    )));
    error::InternalError::from_response(err, response).into()
}

/// Same envelope for malformed query strings.
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!(
        "Invalid query parameters: {detail}"
    )));
    error::InternalError::from_response(err, response).into()
}
