use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::responses::SessionUserResponse;
use crate::services::extract_session_user;

pub async fn handle_me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::Ok().json(SessionUserResponse { user }))
}
