use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::ErrorResponse;
use crate::models::events::entities::StudentEvent;
use crate::models::values::entities::{ValueRecord, ValueType};

/// Whole-school CSV: one row per student, with the academics percentage,
/// both value scores and the full award history folded in.
pub async fn export_students(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match storage.list_all_students_with_teacher().await {
        Ok(students) => students,
        Err(e) => {
            error!("Failed to load students for export: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to export data")));
        }
    };
    let academics = match storage.list_all_academics().await {
        Ok(academics) => academics,
        Err(e) => {
            error!("Failed to load academics for export: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to export data")));
        }
    };
    let values = match storage.list_all_values().await {
        Ok(values) => values,
        Err(e) => {
            error!("Failed to load value scores for export: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to export data")));
        }
    };
    let events = match storage.list_all_events().await {
        Ok(events) => events,
        Err(e) => {
            error!("Failed to load events for export: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to export data")));
        }
    };

    // Index the record tables by student for the row join
    let academics_by_student: HashMap<i64, f64> = academics
        .iter()
        .map(|a| (a.student_id, a.percentage))
        .collect();
    let mut values_by_student: HashMap<i64, Vec<&ValueRecord>> = HashMap::new();
    for value in &values {
        values_by_student.entry(value.student_id).or_default().push(value);
    }
    let mut events_by_student: HashMap<i64, Vec<&StudentEvent>> = HashMap::new();
    for event in &events {
        events_by_student.entry(event.student_id).or_default().push(event);
    }

    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "Student ID",
        "Student Name",
        "Teacher Name",
        "Teacher Email",
        "Academics Percentage",
        "Leadership Score",
        "Bhavan's Values Score",
        "Total Events",
        "Total Points",
        "Events Details",
    ])
    .map_err(|e| {
        error!("CSV write failed: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to export data")
    })?;

    for row in &students {
        let student = &row.student;
        let student_values: &[&ValueRecord] = values_by_student
            .get(&student.id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let student_events: &[&StudentEvent] = events_by_student
            .get(&student.id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let leadership = student_values
            .iter()
            .find(|v| v.value_type == ValueType::LeadershipAndResponsibility);
        let bhavans = student_values
            .iter()
            .find(|v| v.value_type == ValueType::BhavansValues);

        let total_points: i32 = student_events.iter().map(|e| e.points).sum();
        let events_details = student_events
            .iter()
            .map(|event| {
                format!(
                    "{} - {} ({}) - {}pts - {}",
                    event.event_category,
                    event.achievement_level,
                    if event.is_group { "Group" } else { "Single" },
                    event.points,
                    event.remark,
                )
            })
            .collect::<Vec<_>>()
            .join("; ");

        wtr.write_record([
            student.id.to_string(),
            student.name.clone(),
            row.teacher_name.clone(),
            row.teacher_email.clone(),
            // Display drops the trailing .0 on integral percentages
            academics_by_student
                .get(&student.id)
                .map(f64::to_string)
                .unwrap_or_default(),
            leadership.map(|v| v.score.to_string()).unwrap_or_default(),
            bhavans.map(|v| v.score.to_string()).unwrap_or_default(),
            student_events.len().to_string(),
            total_points.to_string(),
            events_details,
        ])
        .map_err(|e| {
            error!("CSV write failed: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to export data")
        })?;
    }

    let data = wtr.into_inner().map_err(|e| {
        error!("CSV flush failed: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to export data")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"students-export.csv\"",
        ))
        .body(data))
}
