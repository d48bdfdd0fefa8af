// Service exports
pub mod onnx;

pub use onnx::{init_runtime, load_all, OnnxClassifier, OnnxError};
