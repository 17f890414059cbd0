use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::ErrorResponse;
use crate::models::students::requests::StudentListParams;
use crate::models::students::responses::{SchoolStudentListResponse, StudentListResponse};
use crate::models::users::entities::UserRole;
use crate::services::extract_session_user;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    params: StudentListParams,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    // ?all=true is only honored for admins; teachers always get their own roster
    if user.role == UserRole::Admin && params.all.unwrap_or(false) {
        return match storage.list_all_students_with_teacher().await {
            Ok(students) => Ok(HttpResponse::Ok().json(SchoolStudentListResponse { students })),
            Err(e) => {
                error!("Failed to list all students: {}", e);
                Ok(HttpResponse::InternalServerError()
                    .json(ErrorResponse::new("Failed to get students")))
            }
        };
    }

    match storage.list_students_by_teacher(user.id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(StudentListResponse { students })),
        Err(e) => {
            error!("Failed to list students for teacher {}: {}", user.id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to get students")))
        }
    }
}
