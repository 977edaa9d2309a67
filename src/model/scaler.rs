//! Fitted standardisation scaler: `(x - mean) / scale` per feature.

use crate::error::{ChurnError, ChurnResult};
use crate::features::{FeatureVector, FEATURE_NAMES};
use serde::Deserialize;
use std::path::Path;

/// On-disk form, mirroring a fitted scaler's `mean_`, `scale_` and `feature_names_in_`.
#[derive(Debug, Deserialize)]
struct ScalerFile {
    mean: Vec<f64>,
    scale: Vec<f64>,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Build from fitted parameters. A zero scale (constant training column) is treated as 1.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, String> {
        if mean.len() != scale.len() {
            return Err(format!(
                "mean has {} entries but scale has {}",
                mean.len(),
                scale.len()
            ));
        }
        if mean.iter().chain(scale.iter()).any(|v| !v.is_finite()) {
            return Err("parameters must be finite".to_string());
        }
        let scale = scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect();
        Ok(Self { mean, scale })
    }

    /// Identity transform of width `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            mean: vec![0.0; n],
            scale: vec![1.0; n],
        }
    }

    pub fn load(path: &Path) -> ChurnResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| ChurnError::artifact(path, e))?;
        let file: ScalerFile =
            serde_json::from_str(&data).map_err(|e| ChurnError::artifact(path, e))?;

        if let Some(names) = &file.feature_names {
            if !names.iter().map(String::as_str).eq(FEATURE_NAMES) {
                return Err(ChurnError::artifact(
                    path,
                    format!("feature_names {names:?} do not match model columns {FEATURE_NAMES:?}"),
                ));
            }
        }

        Self::new(file.mean, file.scale).map_err(|reason| ChurnError::artifact(path, reason))
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Scale one vector into the classifier's f32 input.
    pub fn transform(&self, features: &FeatureVector) -> ChurnResult<Vec<f32>> {
        let values = features.as_slice();
        if values.len() != self.n_features() {
            return Err(ChurnError::inference(format!(
                "feature vector has {} entries, scaler expects {}",
                values.len(),
                self.n_features()
            )));
        }
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| ((x - m) / s) as f32)
            .collect())
    }
}
