use serde::Deserialize;

use crate::models::events::entities::{AchievementLevel, EventCategory};
use crate::models::values::entities::ValueType;

// Query params for GET /api/students
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    // admins pass all=true for the whole school
    pub all: Option<bool>,
}

// Composite create payload: the student row plus initial records,
// applied in one transaction.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub academics: Option<AcademicsInput>,
    pub values: Option<Vec<ValueInput>>,
    pub events: Option<Vec<EventInput>>,
}

#[derive(Debug, Deserialize)]
pub struct AcademicsInput {
    pub percentage: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ValueInput {
    pub value_type: ValueType,
    pub score: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct EventInput {
    pub event_category: EventCategory,
    pub achievement_level: AchievementLevel,
    #[serde(default)]
    pub is_group: bool,
    pub remark: Option<String>,
}

// Body of PUT /api/students/{id}
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
}
