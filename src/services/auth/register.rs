use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use crate::models::ErrorResponse;
use crate::models::auth::requests::RegisterRequest;
use crate::models::auth::responses::RegisterResponse;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRecord;
use crate::utils::password::hash_password;
use crate::utils::session::SessionUtils;
use crate::utils::validate::validate_email;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (email, password, name) = match (
        non_empty(register_request.email),
        non_empty(register_request.password),
        non_empty(register_request.name),
    ) {
        (Some(email), Some(password), Some(name)) => (email, password, name),
        _ => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
                "Email, password, and name are required",
            )));
        }
    };

    if let Err(message) = validate_email(&email) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(message)));
    }

    match storage.get_user_by_email(&email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("User with this email already exists")));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check for existing user: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create user")));
        }
    }

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password during registration: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create user")));
        }
    };

    // Self-registered accounts are always teachers
    let record = CreateUserRecord {
        email,
        password_hash,
        name,
        role: UserRole::Teacher,
    };

    let user = match storage.create_user(record).await {
        Ok(user) => user,
        Err(e) => {
            error!("Failed to create user: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create user")));
        }
    };

    let token = match SessionUtils::issue_token(user.id) {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to issue session token: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to create user")));
        }
    };

    info!("User {} registered", user.email);
    Ok(HttpResponse::Created()
        .cookie(SessionUtils::create_session_cookie(&token))
        .json(RegisterResponse {
            message: "User created successfully".to_string(),
            user_id: user.id,
        }))
}

// Missing and empty both count as absent
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
