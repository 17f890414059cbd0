use serde::Deserialize;

use super::entities::UserRole;

// Admin action on a teacher account; only "reset_password" is recognized
#[derive(Debug, Deserialize)]
pub struct TeacherActionRequest {
    pub action: String,
}

// Storage-level insert shape; the password is already hashed here
#[derive(Debug, Clone)]
pub struct CreateUserRecord {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
}
