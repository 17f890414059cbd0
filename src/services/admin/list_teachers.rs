use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::ErrorResponse;
use crate::models::users::responses::{TeacherListResponse, TeacherSummary};

pub async fn list_teachers(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teachers = match storage.list_teachers().await {
        Ok(teachers) => teachers,
        Err(e) => {
            error!("Failed to list teachers: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to get teachers"))
            );
        }
    };

    let mut summaries = Vec::with_capacity(teachers.len());
    for teacher in teachers {
        let student_count = match storage.count_students_by_teacher(teacher.id).await {
            Ok(count) => count,
            Err(e) => {
                error!("Failed to count students for teacher {}: {}", teacher.id, e);
                return Ok(HttpResponse::InternalServerError()
                    .json(ErrorResponse::new("Failed to get teachers")));
            }
        };
        summaries.push(TeacherSummary {
            id: teacher.id,
            email: teacher.email,
            name: teacher.name,
            created_at: teacher.created_at,
            student_count,
        });
    }

    Ok(HttpResponse::Ok().json(TeacherListResponse {
        teachers: summaries,
    }))
}
