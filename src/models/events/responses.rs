use serde::Serialize;

use super::entities::StudentEvent;

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<StudentEvent>,
}

#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub message: String,
    #[serde(rename = "eventId")]
    pub event_id: i64,
}
