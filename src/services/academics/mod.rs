pub mod delete;
pub mod get;
pub mod save;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::academics::requests::SaveAcademicsRequest;
use crate::storage::Storage;

pub struct AcademicsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicsService {
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

    pub async fn get_academics(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_academics(self, request, student_id).await
    }

    // Upsert keyed on the student; a second save overwrites the first
    pub async fn save_academics(
        &self,
        request: &HttpRequest,
        student_id: i64,
        save_data: SaveAcademicsRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_academics(self, request, student_id, save_data).await
    }

    pub async fn update_academics(
        &self,
        request: &HttpRequest,
        academics_id: i64,
        update_data: SaveAcademicsRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_academics(self, request, academics_id, update_data).await
    }

    pub async fn delete_academics(
        &self,
        request: &HttpRequest,
        academics_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_academics(self, request, academics_id).await
    }
}
