use serde::Deserialize;

// Body of POST /students/{id}/academics and PUT /academics/{id}
#[derive(Debug, Deserialize)]
pub struct SaveAcademicsRequest {
    pub percentage: Option<f64>,
}
