use crate::core::classifier::{Classifier, InferenceError};
use crate::models::{Disease, FieldSpec, Screening};
use std::sync::Arc;
use thiserror::Error;

/// Errors produced by the screening pipeline
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Expected {expected} values but received {got}")]
    FieldCountMismatch { expected: usize, got: usize },

    #[error("The following fields are empty: {}. Please fill them out.", .0.join(", "))]
    EmptyFields(Vec<String>),

    #[error("Input error: value {value:?} for {field} is not a number. Please ensure all inputs are numeric.")]
    NotNumeric { field: String, value: String },

    #[error("Model returned unexpected label {0}")]
    UnexpectedLabel(i64),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl ScreenError {
    /// Whether re-prompting the user can fix this error
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScreenError::FieldCountMismatch { .. }
                | ScreenError::EmptyFields(_)
                | ScreenError::NotNumeric { .. }
        )
    }
}

/// Validate raw field values and convert them to a feature vector
///
/// Blank detection runs over every field first so the error can list all
/// offending names together; only then is each value parsed as a float.
pub fn parse_features(fields: &[FieldSpec], values: &[String]) -> Result<Vec<f32>, ScreenError> {
    if values.len() != fields.len() {
        return Err(ScreenError::FieldCountMismatch {
            expected: fields.len(),
            got: values.len(),
        });
    }

    let empty: Vec<String> = fields
        .iter()
        .zip(values)
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.name.to_string())
        .collect();

    if !empty.is_empty() {
        return Err(ScreenError::EmptyFields(empty));
    }

    fields
        .iter()
        .zip(values)
        .map(|(field, value)| {
            value.trim().parse::<f32>().map_err(|_| ScreenError::NotNumeric {
                field: field.name.to_string(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}

/// Screening orchestrator: one classifier per disease, injected at startup
///
/// Classifiers are constructed once in `main` and never mutated afterwards,
/// replacing the module-level model globals of a naive rendition.
#[derive(Clone)]
pub struct Screener {
    diabetes: Arc<dyn Classifier>,
    heart: Arc<dyn Classifier>,
    parkinsons: Arc<dyn Classifier>,
}

impl Screener {
    pub fn new(
        diabetes: Arc<dyn Classifier>,
        heart: Arc<dyn Classifier>,
        parkinsons: Arc<dyn Classifier>,
    ) -> Self {
        Self { diabetes, heart, parkinsons }
    }

    fn classifier(&self, disease: Disease) -> &dyn Classifier {
        match disease {
            Disease::Diabetes => self.diabetes.as_ref(),
            Disease::Heart => self.heart.as_ref(),
            Disease::Parkinsons => self.parkinsons.as_ref(),
        }
    }

    /// Run one screening: validate, convert, predict, map label to verdict
    ///
    /// `predict` is called exactly once, and only after every value has
    /// passed validation.
    pub fn screen(&self, disease: Disease, values: &[String]) -> Result<Screening, ScreenError> {
        let features = parse_features(disease.fields(), values)?;

        let label = self.classifier(disease).predict(&features)?;

        let positive = match label {
            0 => false,
            1 => true,
            other => return Err(ScreenError::UnexpectedLabel(other)),
        };

        Ok(Screening {
            disease,
            label,
            positive,
            verdict: disease.verdict(positive).to_string(),
        })
    }
}
