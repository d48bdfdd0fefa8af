// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Disease, FieldSpec, Screening};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, FieldView, FormResponse, FormSummary, FormsResponse, HealthResponse};
