use serde::Serialize;

use super::entities::Academics;

// null when the student has no academics row yet
#[derive(Debug, Serialize)]
pub struct AcademicsResponse {
    pub academics: Option<Academics>,
}
