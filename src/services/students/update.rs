use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ErrorResponse, MessageResponse};
use crate::services::{ensure_role, extract_session_user};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(response) = ensure_role(&user, UserRole::Teacher) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    let name = match update_data.name {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Ok(
                HttpResponse::BadRequest().json(ErrorResponse::new("Student name is required"))
            );
        }
    };

    // The update is keyed on (student, owner), so someone else's student
    // reads as not found rather than forbidden
    match storage.update_student_name(student_id, user.id, &name).await {
        Ok(true) => Ok(HttpResponse::Ok().json(MessageResponse::new("Student updated successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ErrorResponse::new("Student not found or unauthorized"))),
        Err(e) => {
            error!("Failed to update student {}: {}", student_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update student")))
        }
    }
}
