pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::events::requests::SaveEventRequest;
use crate::storage::Storage;

pub struct EventService {
    storage: Option<Arc<dyn Storage>>,
}

impl EventService {
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

    pub async fn list_events(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_events(self, request, student_id).await
    }

    // Points are computed from (achievement level, is_group) here on the
    // server; nothing point-shaped is read from the body
    pub async fn create_event(
        &self,
        request: &HttpRequest,
        student_id: i64,
        event_data: SaveEventRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_event(self, request, student_id, event_data).await
    }

    pub async fn update_event(
        &self,
        request: &HttpRequest,
        event_id: i64,
        event_data: SaveEventRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_event(self, request, event_id, event_data).await
    }

    pub async fn delete_event(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_event(self, request, event_id).await
    }
}
