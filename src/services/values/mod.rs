pub mod delete;
pub mod list;
pub mod save;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::values::requests::{SaveValueRequest, UpdateValueRequest};
use crate::storage::Storage;

pub struct ValueService {
    storage: Option<Arc<dyn Storage>>,
}

impl ValueService {
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

    pub async fn list_values(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_values(self, request, student_id).await
    }

    // Upsert keyed on (student, value type); saving a type twice overwrites
    pub async fn save_value(
        &self,
        request: &HttpRequest,
        student_id: i64,
        save_data: SaveValueRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_value(self, request, student_id, save_data).await
    }

    pub async fn update_value(
        &self,
        request: &HttpRequest,
        value_id: i64,
        update_data: UpdateValueRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_value(self, request, value_id, update_data).await
    }

    pub async fn delete_value(
        &self,
        request: &HttpRequest,
        value_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_value(self, request, value_id).await
    }
}
