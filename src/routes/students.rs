use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::SafeStudentIdI64;

use super::academics::{get_academics, save_academics};
use super::events::{create_event, list_events};
use super::values::{list_values, save_value};

// Lazily initialized global StudentService instance
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(&req, query.into_inner())
        .await
}

pub async fn create_student(
    req: HttpRequest,
    body: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, body.into_inner())
        .await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, student_id.0).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    body: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, body.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

// Route configuration. The per-student record collections live inside this
// scope; record PUT/DELETE by record id sit under their own scopes.
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .wrap(middlewares::RequireSession)
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            )
            .service(
                web::resource("/{student_id}/academics")
                    .route(web::get().to(get_academics))
                    .route(web::post().to(save_academics)),
            )
            .service(
                web::resource("/{student_id}/values")
                    .route(web::get().to(list_values))
                    .route(web::post().to(save_value)),
            )
            .service(
                web::resource("/{student_id}/events")
                    .route(web::get().to(list_events))
                    .route(web::post().to(create_event)),
            ),
    );
}
