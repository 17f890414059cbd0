//! Business services. Each resource gets a service struct whose methods
//! delegate to one file per operation.

pub mod academics;
pub mod admin;
pub mod auth;
pub mod events;
pub mod students;
pub mod values;

pub use academics::AcademicsService;
pub use admin::AdminService;
pub use auth::AuthService;
pub use events::EventService;
pub use students::StudentService;
pub use values::ValueService;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};

use crate::errors::MeritbookError;
use crate::middlewares::RequireSession;
use crate::models::ErrorResponse;
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

/// Authenticated user placed in the request extensions by `RequireSession`.
///
/// Every service method runs behind the middleware, so a miss here means a
/// route was registered without it.
pub(crate) fn extract_session_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireSession::extract_user(request)
        .ok_or_else(|| HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized")))
}

/// Role gate for single-role endpoints. Runs before any validation, the
/// same place in the request lifecycle where the session itself is checked.
pub(crate) fn ensure_role(user: &User, required: UserRole) -> Result<(), HttpResponse> {
    if user.role != required {
        return Err(HttpResponse::Forbidden().json(ErrorResponse::new("Forbidden")));
    }
    Ok(())
}

/// Read access to a student: admins see the whole school, teachers only
/// their own roster.
pub(crate) fn ensure_can_view(user: &User, owner_id: i64) -> Result<(), HttpResponse> {
    if user.role == UserRole::Teacher && owner_id != user.id {
        return Err(HttpResponse::Forbidden().json(ErrorResponse::new("Forbidden")));
    }
    Ok(())
}

/// Write access to a student and its records: the owning teacher only.
pub(crate) fn ensure_owner(user: &User, owner_id: i64) -> Result<(), HttpResponse> {
    if owner_id != user.id {
        return Err(HttpResponse::Forbidden().json(ErrorResponse::new("Forbidden")));
    }
    Ok(())
}

/// Owning teacher of the student a record hangs off. The student row is
/// guaranteed by the foreign key, so a miss surfaces as a database error.
pub(crate) async fn get_record_owner(
    storage: &Arc<dyn Storage>,
    student_id: i64,
) -> crate::errors::Result<i64> {
    let student = storage.get_student_by_id(student_id).await?.ok_or_else(|| {
        MeritbookError::database_operation(format!(
            "Student {student_id} is missing for an existing record"
        ))
    })?;
    Ok(student.teacher_id)
}
