use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EventService;
use crate::models::ErrorResponse;
use crate::models::events::requests::{NewEvent, SaveEventRequest};
use crate::models::events::responses::CreateEventResponse;
use crate::models::users::entities::UserRole;
use crate::points::calculate_points;
use crate::services::{ensure_owner, ensure_role, extract_session_user};

pub async fn create_event(
    service: &EventService,
    request: &HttpRequest,
    student_id: i64,
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

    let event = match validate_event(event_data) {
        Ok(event) => event,
        Err(response) => return Ok(response),
    };

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Student not found")));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", student_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create event")));
        }
    };

    if let Err(response) = ensure_owner(&user, student.teacher_id) {
        return Ok(response);
    }

    match storage.create_event(student_id, &event).await {
        Ok(event_id) => {
            info!(
                "Event {} ({} points) added to student {}",
                event_id, event.points, student_id
            );
            Ok(HttpResponse::Created().json(CreateEventResponse {
                message: "Event added successfully".to_string(),
                event_id,
            }))
        }
        Err(e) => {
            error!("Failed to create event for student {}: {}", student_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create event")))
        }
    }
}

/// Shared by create and update: reject blank remarks and derive the points
/// from the achievement level, ignoring anything the client might claim.
pub(super) fn validate_event(event_data: SaveEventRequest) -> Result<NewEvent, HttpResponse> {
    let remark = event_data
        .remark
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if remark.is_empty() {
        return Err(HttpResponse::BadRequest().json(ErrorResponse::new("Remark is required")));
    }

    Ok(NewEvent {
        event_category: event_data.event_category,
        achievement_level: event_data.achievement_level,
        is_group: event_data.is_group,
        points: calculate_points(event_data.achievement_level, event_data.is_group),
        remark: remark.to_string(),
    })
}
