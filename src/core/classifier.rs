use thiserror::Error;

/// Failure inside a classifier backend
#[derive(Debug, Error)]
#[error("inference failed: {0}")]
pub struct InferenceError(pub String);

/// A pre-trained binary classifier
///
/// Implementations are immutable after construction and shared read-only
/// across request handlers. The screening pipeline only ever sees this
/// trait, so tests can substitute a stub and the ONNX backend stays
/// confined to the services layer.
pub trait Classifier: Send + Sync {
    /// Classify one feature vector, returning the predicted label
    fn predict(&self, features: &[f32]) -> Result<i64, InferenceError>;
}
