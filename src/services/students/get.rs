use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::ErrorResponse;
use crate::models::students::responses::StudentResponse;
use crate::services::{ensure_can_view, extract_session_user};

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Student not found")));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", student_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to get student")));
        }
    };

    if let Err(response) = ensure_can_view(&user, student.teacher_id) {
        return Ok(response);
    }

    Ok(HttpResponse::Ok().json(StudentResponse { student }))
}
