use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::ErrorResponse;
use crate::models::events::requests::NewEvent;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::students::responses::CreateStudentResponse;
use crate::models::values::entities::ValueType;
use crate::models::values::requests::NewValueScore;
use crate::models::users::entities::UserRole;
use crate::points::calculate_points;
use crate::services::{ensure_role, extract_session_user};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(response) = ensure_role(&user, UserRole::Teacher) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    let name = match student_data.name {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Ok(
                HttpResponse::BadRequest().json(ErrorResponse::new("Student name is required"))
            );
        }
    };

    // Academics is mandatory on creation
    let percentage = match student_data.academics.and_then(|academics| academics.percentage) {
        Some(percentage) => percentage,
        None => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("Academics percentage is required")));
        }
    };
    if !(0.0..=100.0).contains(&percentage) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "Academics percentage must be between 0 and 100",
        )));
    }

    // Both value types must arrive, each exactly once
    let values = student_data.values.unwrap_or_default();
    let has_leadership = values
        .iter()
        .any(|value| value.value_type == ValueType::LeadershipAndResponsibility);
    let has_bhavans = values
        .iter()
        .any(|value| value.value_type == ValueType::BhavansValues);
    if values.len() != 2 || !has_leadership || !has_bhavans {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "Both Leadership and Responsibility and Bhavan's Values scores are required",
        )));
    }

    let mut new_values = Vec::with_capacity(values.len());
    for value in &values {
        let score = match value.score {
            Some(score) if (1..=10).contains(&score) => score,
            _ => {
                return Ok(HttpResponse::BadRequest()
                    .json(ErrorResponse::new("Value score must be between 1 and 10")));
            }
        };
        new_values.push(NewValueScore {
            value_type: value.value_type,
            score,
        });
    }

    // Events are optional, but every supplied one needs a remark
    let events = student_data.events.unwrap_or_default();
    let mut new_events = Vec::with_capacity(events.len());
    for event in &events {
        let remark = event.remark.as_deref().map(str::trim).unwrap_or_default();
        if remark.is_empty() {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("Remark is required for all events")));
        }
        new_events.push(NewEvent {
            event_category: event.event_category,
            achievement_level: event.achievement_level,
            is_group: event.is_group,
            points: calculate_points(event.achievement_level, event.is_group),
            remark: remark.to_string(),
        });
    }

    match storage
        .create_student_with_records(user.id, &name, Some(percentage), &new_values, &new_events)
        .await
    {
        Ok(student_id) => {
            info!("Student {} created by teacher {}", student_id, user.id);
            Ok(HttpResponse::Created().json(CreateStudentResponse {
                message: "Student created successfully".to_string(),
                student_id,
            }))
        }
        Err(e) => {
            error!("Failed to create student: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create student")))
        }
    }
}
