use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::values::requests::{SaveValueRequest, UpdateValueRequest};
use crate::services::ValueService;
use crate::utils::{SafeStudentIdI64, SafeValueIdI64};

// Lazily initialized global ValueService instance
static VALUE_SERVICE: Lazy<ValueService> = Lazy::new(ValueService::new_lazy);

// Handlers for /api/students/{student_id}/values, registered by the
// students scope
pub async fn list_values(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    VALUE_SERVICE.list_values(&req, student_id.0).await
}

pub async fn save_value(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    body: web::Json<SaveValueRequest>,
) -> ActixResult<HttpResponse> {
    VALUE_SERVICE
        .save_value(&req, student_id.0, body.into_inner())
        .await
}

pub async fn update_value(
    req: HttpRequest,
    value_id: SafeValueIdI64,
    body: web::Json<UpdateValueRequest>,
) -> ActixResult<HttpResponse> {
    VALUE_SERVICE
        .update_value(&req, value_id.0, body.into_inner())
        .await
}

pub async fn delete_value(req: HttpRequest, value_id: SafeValueIdI64) -> ActixResult<HttpResponse> {
    VALUE_SERVICE.delete_value(&req, value_id.0).await
}

// Route configuration
pub fn configure_values_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/values")
            .wrap(middlewares::RequireSession)
            .service(
                web::resource("/{value_id}")
                    .route(web::put().to(update_value))
                    .route(web::delete().to(delete_value)),
            ),
    );
}
