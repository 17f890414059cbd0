use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EventService;
use super::create::validate_event;
use crate::models::events::requests::SaveEventRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ErrorResponse, MessageResponse};
use crate::services::{ensure_owner, ensure_role, extract_session_user, get_record_owner};

pub async fn update_event(
    service: &EventService,
    request: &HttpRequest,
    event_id: i64,
    event_data: SaveEventRequest,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(response) = ensure_role(&user, UserRole::Teacher) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    // Recomputes the points; an edited level or grouping changes the award
    let new_event = match validate_event(event_data) {
        Ok(event) => event,
        Err(response) => return Ok(response),
    };

    let event = match storage.get_event_by_id(event_id).await {
        Ok(Some(event)) => event,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Event not found")));
        }
        Err(e) => {
            error!("Failed to get event {}: {}", event_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update event")));
        }
    };

    let owner_id = match get_record_owner(&storage, event.student_id).await {
        Ok(owner_id) => owner_id,
        Err(e) => {
            error!("Failed to resolve owner of event {}: {}", event_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update event")));
        }
    };
    if let Err(response) = ensure_owner(&user, owner_id) {
        return Ok(response);
    }

    match storage.update_event(event_id, &new_event).await {
        Ok(_) => Ok(HttpResponse::Ok().json(MessageResponse::new("Event updated successfully"))),
        Err(e) => {
            error!("Failed to update event {}: {}", event_id, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to update event")))
        }
    }
}
