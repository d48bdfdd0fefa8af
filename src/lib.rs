//! MedScreen - disease screening service backed by pre-trained classifiers
//!
//! This library exposes the screening pipeline used by the MedScreen web
//! front-end: fixed per-disease form schemas, input validation, and a
//! dispatch into one of three injected binary classifiers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{parse_features, Classifier, InferenceError, ScreenError, Screener};
pub use crate::models::{Disease, FieldSpec, PredictRequest, Screening};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(Disease::Diabetes.fields().len(), 8);
        assert_eq!(Disease::from_slug("heart"), Some(Disease::Heart));
    }
}
