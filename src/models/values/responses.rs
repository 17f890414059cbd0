use serde::Serialize;

use super::entities::ValueRecord;

#[derive(Debug, Serialize)]
pub struct ValueListResponse {
    pub values: Vec<ValueRecord>,
}
