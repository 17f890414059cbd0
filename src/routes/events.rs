use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::events::requests::SaveEventRequest;
use crate::services::EventService;
use crate::utils::{SafeEventIdI64, SafeStudentIdI64};

// Lazily initialized global EventService instance
static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

// Handlers for /api/students/{student_id}/events, registered by the
// students scope
pub async fn list_events(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_events(&req, student_id.0).await
}

pub async fn create_event(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    body: web::Json<SaveEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .create_event(&req, student_id.0, body.into_inner())
        .await
}

pub async fn update_event(
    req: HttpRequest,
    event_id: SafeEventIdI64,
    body: web::Json<SaveEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .update_event(&req, event_id.0, body.into_inner())
        .await
}

pub async fn delete_event(req: HttpRequest, event_id: SafeEventIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.delete_event(&req, event_id.0).await
}

// Route configuration
pub fn configure_events_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/events")
            .wrap(middlewares::RequireSession)
            .service(
                web::resource("/{event_id}")
                    .route(web::put().to(update_event))
                    .route(web::delete().to(delete_event)),
            ),
    );
}
