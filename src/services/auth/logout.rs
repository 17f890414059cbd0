use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::MessageResponse;
use crate::utils::session::SessionUtils;

/// Clears the session cookie. Tokens are stateless, so logout is purely a
/// client-side affair and succeeds even without a valid session.
pub async fn handle_logout() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .cookie(SessionUtils::create_empty_session_cookie())
        .json(MessageResponse::new("Logout successful")))
}
