// Core screening exports
pub mod adapter;
pub mod classifier;

pub use adapter::{parse_features, ScreenError, Screener};
pub use classifier::{Classifier, InferenceError};
