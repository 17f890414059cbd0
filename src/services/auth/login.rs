use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use crate::models::ErrorResponse;
use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::LoginResponse;
use crate::utils::password::verify_password;
use crate::utils::session::SessionUtils;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (email, password) = match (login_request.email, login_request.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("Email and password are required")));
        }
    };

    let user = match storage.get_user_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized()
                .json(ErrorResponse::new("Invalid email or password")));
        }
        Err(e) => {
            error!("Failed to look up user for login: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to log in"))
            );
        }
    };

    // Unknown email and wrong password are indistinguishable to the caller
    if !verify_password(&password, &user.password_hash) {
        return Ok(
            HttpResponse::Unauthorized().json(ErrorResponse::new("Invalid email or password"))
        );
    }

    let token = match SessionUtils::issue_token(user.id) {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to issue session token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to log in"))
            );
        }
    };

    info!("User {} logged in", user.email);
    Ok(HttpResponse::Ok()
        .cookie(SessionUtils::create_session_cookie(&token))
        .json(LoginResponse {
            message: "Login successful".to_string(),
            user,
        }))
}
