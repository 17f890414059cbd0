use serde::{Deserialize, Serialize};

// Academic percentage record, at most one per student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Academics {
    pub id: i64,
    pub student_id: i64,
    pub percentage: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
