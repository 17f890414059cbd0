use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::users::entities::UserRole;
use crate::models::{ErrorResponse, MessageResponse};
use crate::services::{ensure_role, extract_session_user};

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(response) = ensure_role(&user, UserRole::Teacher) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    // Academics, values and events go with the student via cascade
    match storage.delete_student(student_id, user.id).await {
        Ok(true) => {
            info!("Student {} deleted by teacher {}", student_id, user.id);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Student deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ErrorResponse::new("Student not found or unauthorized"))),
        Err(e) => {
            error!("Failed to delete student {}: {}", student_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to delete student")))
        }
    }
}
