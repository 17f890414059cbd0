use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AcademicsService;
use crate::models::users::entities::UserRole;
use crate::models::{ErrorResponse, MessageResponse};
use crate::services::{ensure_owner, ensure_role, extract_session_user, get_record_owner};

pub async fn delete_academics(
    service: &AcademicsService,
    request: &HttpRequest,
    academics_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match extract_session_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    if let Err(response) = ensure_role(&user, UserRole::Teacher) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    let academics = match storage.get_academics_by_id(academics_id).await {
        Ok(Some(academics)) => academics,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ErrorResponse::new("Academics record not found"))
            );
        }
        Err(e) => {
            error!("Failed to get academics {}: {}", academics_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to delete academics")));
        }
    };

    let owner_id = match get_record_owner(&storage, academics.student_id).await {
        Ok(owner_id) => owner_id,
        Err(e) => {
            error!("Failed to resolve owner of academics {}: {}", academics_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to delete academics")));
        }
    };
    if let Err(response) = ensure_owner(&user, owner_id) {
        return Ok(response);
    }

    // Deleted by owning student, the same key the upsert uses
    match storage.delete_academics(academics.student_id).await {
        Ok(_) => {
            Ok(HttpResponse::Ok().json(MessageResponse::new("Academics deleted successfully")))
        }
        Err(e) => {
            error!("Failed to delete academics {}: {}", academics_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to delete academics")))
        }
    }
}
