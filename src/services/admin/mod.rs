pub mod delete_teacher;
pub mod export;
pub mod list_teachers;
pub mod reset_password;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::TeacherActionRequest;
use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // Teacher directory with roster sizes
    pub async fn list_teachers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list_teachers::list_teachers(self, request).await
    }

    // Removes a teacher account; the roster cascades away with it
    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete_teacher::delete_teacher(self, request, teacher_id).await
    }

    // Account action on a teacher; only password resets are recognized
    pub async fn teacher_action(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
        action_data: TeacherActionRequest,
    ) -> ActixResult<HttpResponse> {
        reset_password::reset_password(self, request, teacher_id, action_data).await
    }

    // Whole-school CSV download
    pub async fn export_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        export::export_students(self, request).await
    }
}
