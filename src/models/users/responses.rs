use serde::{Deserialize, Serialize};

// Teacher directory entry with roster size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub student_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeacherListResponse {
    pub teachers: Vec<TeacherSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub message: String,
    // handed back so the admin can pass it on
    #[serde(rename = "tempPassword")]
    pub temp_password: String,
}
