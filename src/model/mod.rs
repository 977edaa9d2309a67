//! Inference invoker: fitted scaler + trained classifier, loaded once and shared read-only.

mod dense;
mod onnx;
mod scaler;

pub use dense::{Activation, DenseLayer, DenseNetwork};
pub use onnx::OnnxClassifier;
pub use scaler::StandardScaler;

use crate::error::{ChurnError, ChurnResult};
use crate::features::FeatureVector;
use crate::risk::Probability;
use std::path::Path;
use std::sync::Arc;

/// Scaled vector → single scalar score.
pub trait Classifier: Send + Sync {
    fn predict(&self, scaled: &[f32]) -> ChurnResult<f32>;

    fn name(&self) -> &str;
}

/// Load the classifier artifact, picking the backend from the file extension.
pub fn load_classifier(path: &Path) -> ChurnResult<Box<dyn Classifier>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("onnx") => Ok(Box::new(OnnxClassifier::load(path)?)),
        Some("json") => Ok(Box::new(DenseNetwork::load(path)?)),
        other => Err(ChurnError::artifact(
            path,
            format!("unsupported classifier format {other:?} (expected .onnx or .json)"),
        )),
    }
}

/// The two immutable process-lifetime artifacts.
pub struct Artifacts {
    pub scaler: StandardScaler,
    pub classifier: Box<dyn Classifier>,
}

impl Artifacts {
    pub fn new(scaler: StandardScaler, classifier: Box<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }

    pub fn load(scaler_path: &Path, model_path: &Path) -> ChurnResult<Self> {
        let scaler = StandardScaler::load(scaler_path)?;
        let classifier = load_classifier(model_path)?;
        Ok(Self::new(scaler, classifier))
    }
}

/// Scales a [`FeatureVector`] and asks the classifier for a probability.
#[derive(Clone)]
pub struct ChurnPredictor {
    artifacts: Arc<Artifacts>,
}

impl ChurnPredictor {
    pub fn new(artifacts: Arc<Artifacts>) -> Self {
        Self { artifacts }
    }

    pub fn predict(&self, features: &FeatureVector) -> ChurnResult<Probability> {
        let scaled = self.artifacts.scaler.transform(features)?;
        let raw = self.artifacts.classifier.predict(&scaled)?;
        Probability::from_model_output(raw)
    }
}
