use serde::Serialize;

use crate::models::users::entities::User;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

// Body of GET /api/auth/me
#[derive(Debug, Serialize)]
pub struct SessionUserResponse {
    pub user: User,
}
