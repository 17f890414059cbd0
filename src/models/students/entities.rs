use serde::{Deserialize, Serialize};

// Student entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub teacher_id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// Roster row with the owning teacher attached (admin view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentWithTeacher {
    #[serde(flatten)]
    pub student: Student,
    pub teacher_name: String,
    pub teacher_email: String,
}
