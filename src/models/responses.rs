use serde::{Deserialize, Serialize};
use crate::models::domain::Disease;

/// One field of a form, as served to the front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldView {
    pub name: String,
    pub prompt: String,
}

/// Response for the form schema endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    pub disease: Disease,
    pub slug: String,
    pub title: String,
    pub fields: Vec<FieldView>,
}

/// Summary entry in the forms listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSummary {
    pub disease: Disease,
    pub slug: String,
    #[serde(rename = "menuLabel")]
    pub menu_label: String,
    #[serde(rename = "fieldCount")]
    pub field_count: usize,
}

/// Response for the forms listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsResponse {
    pub forms: Vec<FormSummary>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub models: Vec<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
