use crate::config::ModelSettings;
use crate::core::{Classifier, InferenceError, Screener};
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading or running ONNX models
#[derive(Debug, Error)]
pub enum OnnxError {
    #[error("ONNX runtime error: {0}")]
    Runtime(#[from] ort::Error),

    #[error("Failed to load model {model} from {path}: {source}")]
    Load {
        model: String,
        path: String,
        source: ort::Error,
    },

    #[error("Model {model} declares no outputs")]
    MissingLabelOutput { model: String },
}

/// Initialize the ONNX Runtime environment
///
/// Must run once before any session is built.
pub fn init_runtime() -> Result<(), OnnxError> {
    ort::init().commit()?;
    Ok(())
}

/// A binary classifier backed by an ONNX Runtime session
///
/// The session requires `&mut` to run, so it sits behind a mutex; the
/// classifier itself is immutable after load and shared via `Arc`.
pub struct OnnxClassifier {
    name: String,
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OnnxClassifier {
    /// Load a serialized model artifact from disk
    ///
    /// Detects the input tensor name and the label output name from the
    /// session metadata. There is no retry or fallback; a failure here is
    /// fatal to startup.
    pub fn load<P: AsRef<Path>>(
        path: P,
        name: &str,
        intra_threads: usize,
    ) -> Result<Self, OnnxError> {
        let path = path.as_ref();

        info!(model = %name, path = %path.display(), threads = intra_threads, "Loading ONNX model");

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(intra_threads)?
            .commit_from_file(path)
            .map_err(|source| OnnxError::Load {
                model: name.to_string(),
                path: path.display().to_string(),
                source,
            })?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        // sklearn-exported classifiers emit a "label" tensor plus class
        // probabilities; the label tensor is the one we dispatch on.
        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name.contains("label"))
            .or_else(|| session.outputs.first())
            .map(|o| o.name.clone())
            .ok_or_else(|| OnnxError::MissingLabelOutput {
                model: name.to_string(),
            })?;

        info!(
            model = %name,
            input = %input_name,
            output = %output_name,
            "Model loaded successfully"
        );

        Ok(Self {
            name: name.to_string(),
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn run_session(&self, features: &[f32]) -> Result<i64, InferenceError> {
        use ort::value::Tensor;

        let shape = vec![1_i64, features.len() as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))
            .map_err(|e| InferenceError(format!("failed to build input tensor: {}", e)))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| InferenceError(format!("session lock poisoned for model {}", self.name)))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input_tensor])
            .map_err(|e| InferenceError(format!("model {} run failed: {}", self.name, e)))?;

        let output = outputs.get(&self.output_name).ok_or_else(|| {
            InferenceError(format!(
                "model {} produced no output named {}",
                self.name, self.output_name
            ))
        })?;

        // Label tensors are i64 for sklearn exports; some converters emit
        // f32, so fall back to rounding.
        if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
            return data.first().copied().ok_or_else(|| {
                InferenceError(format!("model {} returned an empty label tensor", self.name))
            });
        }

        if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
            return data
                .first()
                .map(|v| v.round() as i64)
                .ok_or_else(|| {
                    InferenceError(format!("model {} returned an empty label tensor", self.name))
                });
        }

        Err(InferenceError(format!(
            "model {} label output has an unsupported dtype",
            self.name
        )))
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32]) -> Result<i64, InferenceError> {
        self.run_session(features)
    }
}

/// Load the three configured model artifacts and assemble the screener
///
/// The first load failure aborts the whole process of loading; the caller
/// halts the application before the HTTP server comes up.
pub fn load_all(settings: &ModelSettings) -> Result<Screener, OnnxError> {
    init_runtime()?;

    let threads = settings.onnx_threads.unwrap_or(1);

    let diabetes = OnnxClassifier::load(&settings.diabetes_path, "diabetes", threads)?;
    let heart = OnnxClassifier::load(&settings.heart_path, "heart_disease", threads)?;
    let parkinsons = OnnxClassifier::load(&settings.parkinsons_path, "parkinsons", threads)?;

    info!(count = 3, "All model artifacts loaded");

    Ok(Screener::new(
        Arc::new(diabetes),
        Arc::new(heart),
        Arc::new(parkinsons),
    ))
}
