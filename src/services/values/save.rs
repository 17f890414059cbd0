use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ValueService;
use crate::models::users::entities::UserRole;
use crate::models::values::requests::SaveValueRequest;
use crate::models::{ErrorResponse, MessageResponse};
use crate::services::{ensure_owner, ensure_role, extract_session_user};
use crate::utils::validate::validate_score;

pub async fn save_value(
    service: &ValueService,
    request: &HttpRequest,
    student_id: i64,
    save_data: SaveValueRequest,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(response) = ensure_role(&user, UserRole::Teacher) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    // The value type itself is vetted by serde; only the score is left
    let score = match save_data.score {
        Some(score) => score,
        None => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("Score must be between 1 and 10")));
        }
    };
    if let Err(message) = validate_score(score) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(message)));
    }

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Student not found")));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to save value"))
            );
        }
    };

    if let Err(response) = ensure_owner(&user, student.teacher_id) {
        return Ok(response);
    }

    match storage
        .upsert_value(student_id, save_data.value_type, score)
        .await
    {
        Ok(()) => Ok(HttpResponse::Created().json(MessageResponse::new("Value saved successfully"))),
        Err(e) => {
            error!("Failed to save value for student {}: {}", student_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to save value")))
        }
    }
}
