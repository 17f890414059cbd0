use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::ErrorResponse;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::TeacherActionRequest;
use crate::models::users::responses::ResetPasswordResponse;
use crate::utils::password::{generate_temp_password, hash_password};

pub async fn reset_password(
    service: &AdminService,
    request: &HttpRequest,
    teacher_id: i64,
    action_data: TeacherActionRequest,
) -> ActixResult<HttpResponse> {
    if action_data.action != "reset_password" {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Invalid action")));
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
                .json(ErrorResponse::new("Failed to reset password")));
        }
    };
    if teacher.role != UserRole::Teacher {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("User is not a teacher")));
    }

    // The plaintext goes back to the admin exactly once; only the hash is kept
    let temp_password = generate_temp_password();
    let password_hash = match hash_password(&temp_password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash temporary password: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to reset password")));
        }
    };

    match storage.update_user_password(teacher_id, &password_hash).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ResetPasswordResponse {
            message: "Password reset successfully".to_string(),
            temp_password,
        })),
        Err(e) => {
            error!("Failed to reset password for teacher {}: {}", teacher_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to reset password")))
        }
    }
}
