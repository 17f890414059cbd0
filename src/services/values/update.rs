use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ValueService;
use crate::models::users::entities::UserRole;
use crate::models::values::requests::UpdateValueRequest;
use crate::models::{ErrorResponse, MessageResponse};
use crate::services::{ensure_owner, ensure_role, extract_session_user, get_record_owner};
use crate::utils::validate::validate_score;

pub async fn update_value(
    service: &ValueService,
    request: &HttpRequest,
    value_id: i64,
    update_data: UpdateValueRequest,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(response) = ensure_role(&user, UserRole::Teacher) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    let score = match update_data.score {
        Some(score) => score,
        None => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("Score must be between 1 and 10")));
        }
    };
    if let Err(message) = validate_score(score) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(message)));
    }

    let value = match storage.get_value_by_id(value_id).await {
        Ok(Some(value)) => value,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Value record not found")));
        }
        Err(e) => {
            error!("Failed to get value {}: {}", value_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update value")));
        }
    };

    let owner_id = match get_record_owner(&storage, value.student_id).await {
        Ok(owner_id) => owner_id,
        Err(e) => {
            error!("Failed to resolve owner of value {}: {}", value_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update value")));
        }
    };
    if let Err(response) = ensure_owner(&user, owner_id) {
        return Ok(response);
    }

    // Addressed by (student, value type), the upsert's conflict key
    match storage
        .update_value_score(value.student_id, value.value_type, score)
        .await
    {
        Ok(_) => Ok(HttpResponse::Ok().json(MessageResponse::new("Value updated successfully"))),
        Err(e) => {
            error!("Failed to update value {}: {}", value_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to update value")))
        }
    }
}
