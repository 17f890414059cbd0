use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AcademicsService;
use crate::models::academics::requests::SaveAcademicsRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ErrorResponse, MessageResponse};
use crate::services::{ensure_owner, ensure_role, extract_session_user};
use crate::utils::validate::validate_percentage;

pub async fn save_academics(
    service: &AcademicsService,
    request: &HttpRequest,
    student_id: i64,
    save_data: SaveAcademicsRequest,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(response) = ensure_role(&user, UserRole::Teacher) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    // Validated before the student lookup; a bad body 400s even for
    // nonexistent students
    let percentage = match save_data.percentage {
        Some(percentage) => percentage,
        None => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("Percentage must be between 0 and 100")));
        }
    };
    if let Err(message) = validate_percentage(percentage) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(message)));
    }

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Student not found")));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", student_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to save academics")));
        }
    };

    if let Err(response) = ensure_owner(&user, student.teacher_id) {
        return Ok(response);
    }

    match storage.upsert_academics(student_id, percentage).await {
        Ok(()) => {
            Ok(HttpResponse::Created().json(MessageResponse::new("Academics saved successfully")))
        }
        Err(e) => {
            error!("Failed to save academics for student {}: {}", student_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to save academics")))
        }
    }
}
