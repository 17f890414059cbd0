use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::academics::requests::SaveAcademicsRequest;
use crate::services::AcademicsService;
use crate::utils::{SafeAcademicsIdI64, SafeStudentIdI64};

// Lazily initialized global AcademicsService instance
static ACADEMICS_SERVICE: Lazy<AcademicsService> = Lazy::new(AcademicsService::new_lazy);

// Handlers for /api/students/{student_id}/academics, registered by the
// students scope
pub async fn get_academics(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE.get_academics(&req, student_id.0).await
}

pub async fn save_academics(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    body: web::Json<SaveAcademicsRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE
        .save_academics(&req, student_id.0, body.into_inner())
        .await
}

pub async fn update_academics(
    req: HttpRequest,
    academics_id: SafeAcademicsIdI64,
    body: web::Json<SaveAcademicsRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE
        .update_academics(&req, academics_id.0, body.into_inner())
        .await
}

pub async fn delete_academics(
    req: HttpRequest,
    academics_id: SafeAcademicsIdI64,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE.delete_academics(&req, academics_id.0).await
}

// Route configuration
pub fn configure_academics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/academics")
            .wrap(middlewares::RequireSession)
            .service(
                web::resource("/{academics_id}")
                    .route(web::put().to(update_academics))
                    .route(web::delete().to(delete_academics)),
            ),
    );
}
