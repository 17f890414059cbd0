use serde::Deserialize;

use super::entities::ValueType;

// Body of POST /students/{id}/values; upserts on (student, value type)
#[derive(Debug, Deserialize)]
pub struct SaveValueRequest {
    pub value_type: ValueType,
    pub score: Option<i32>,
}

// Body of PUT /values/{id}; only the score can change
#[derive(Debug, Deserialize)]
pub struct UpdateValueRequest {
    pub score: Option<i32>,
}

// Storage-level insert shape for one validated value score
#[derive(Debug, Clone)]
pub struct NewValueScore {
    pub value_type: ValueType,
    pub score: i32,
}
