use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to run one screening form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    /// Raw text-field values, in form field order
    #[validate(length(min = 1, message = "values must not be empty"))]
    pub values: Vec<String>,
}
