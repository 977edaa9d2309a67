//! ONNX Runtime classifier. Input: [1, n] f32, Output: probability.
//! Uses `ort` with a dynamically loaded runtime; a missing model file is a load error.

use super::Classifier;
use crate::error::{ChurnError, ChurnResult};
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;
use std::sync::Mutex;

pub struct OnnxClassifier {
    /// `run` needs `&mut Session`; the mutex lets the classifier be shared behind `&self`.
    session: Mutex<Session>,
    model_name: String,
}

impl OnnxClassifier {
    pub fn load(path: &Path) -> ChurnResult<Self> {
        if !path.exists() {
            return Err(ChurnError::artifact(path, "model file not found"));
        }

        let session = Session::builder()
            .map_err(|e| ChurnError::artifact(path, e))?
            .with_intra_threads(1)
            .map_err(|e| ChurnError::artifact(path, e))?
            .commit_from_file(path)
            .map_err(|e| ChurnError::artifact(path, e))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        Ok(Self {
            session: Mutex::new(session),
            model_name,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, scaled: &[f32]) -> ChurnResult<f32> {
        let input = Tensor::from_array((vec![1i64, scaled.len() as i64], scaled.to_vec()))
            .map_err(|e| ChurnError::inference(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| ChurnError::inference(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(ChurnError::inference)?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| ChurnError::inference("no output tensor"))?;

        let (_shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ChurnError::inference(format!("tensor extraction failed: {e}")))?;

        data.first()
            .copied()
            .ok_or_else(|| ChurnError::inference("empty output tensor"))
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
