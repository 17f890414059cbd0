use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::users::entities::UserRole;
use crate::models::{ErrorResponse, MessageResponse};
use crate::services::extract_session_user;

pub async fn delete_teacher(
    service: &AdminService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    // An admin deleting itself would invalidate the session mid-request
    if teacher_id == user.id {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("You cannot delete your own account")));
    }
    let storage = service.get_storage(request);

    let teacher = match storage.get_user_by_id(teacher_id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Teacher not found")));
        }
        Err(e) => {
            error!("Failed to get teacher {}: {}", teacher_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to delete teacher")));
        }
    };
    if teacher.role != UserRole::Teacher {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("User is not a teacher")));
    }

    // Students and their records follow the account out via ON DELETE CASCADE
    match storage.delete_user(teacher_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(MessageResponse::new("Teacher deleted successfully"))),
        Err(e) => {
            error!("Failed to delete teacher {}: {}", teacher_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to delete teacher")))
        }
    }
}
