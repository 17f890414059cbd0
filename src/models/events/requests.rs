use serde::Deserialize;

use super::entities::{AchievementLevel, EventCategory};

// Body of POST /students/{id}/events and PUT /events/{id}. Points are never
// accepted from the client; they are recomputed from level and is_group.
#[derive(Debug, Deserialize)]
pub struct SaveEventRequest {
    pub event_category: EventCategory,
    pub achievement_level: AchievementLevel,
    pub is_group: bool,
    pub remark: Option<String>,
}

// Storage-level insert shape; points are already computed from the level
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_category: EventCategory,
    pub achievement_level: AchievementLevel,
    pub is_group: bool,
    pub points: i32,
    pub remark: String,
}
