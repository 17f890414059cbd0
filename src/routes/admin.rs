use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::TeacherActionRequest;
use crate::services::AdminService;
use crate::utils::SafeTeacherIdI64;

// Lazily initialized global AdminService instance
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_teachers(&req).await
}

pub async fn delete_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.delete_teacher(&req, teacher_id.0).await
}

pub async fn teacher_action(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
    body: web::Json<TeacherActionRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .teacher_action(&req, teacher_id.0, body.into_inner())
        .await
}

pub async fn export_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.export_students(&req).await
}

// Route configuration. RequireSession runs first and fills in the user,
// RequireRole then turns non-admins away at the scope boundary.
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(middlewares::RequireRole::new(&UserRole::Admin))
            .wrap(middlewares::RequireSession)
            .route("/teachers", web::get().to(list_teachers))
            .service(
                web::resource("/teachers/{teacher_id}")
                    .route(web::delete().to(delete_teacher))
                    .route(web::post().to(teacher_action)),
            )
            .route("/export", web::get().to(export_students)),
    );
}
