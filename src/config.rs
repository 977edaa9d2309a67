//! Predictor configuration: artifact locations, risk threshold, output and logging.

use crate::error::{ChurnError, ChurnResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fitted scaler artifact (JSON)
    pub scaler_path: PathBuf,
    /// Trained classifier artifact (`.onnx` or dense-network `.json`)
    pub model_path: PathBuf,
    /// Risk labelling
    pub risk: RiskConfig,
    /// Result rendering
    pub output: OutputConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Probability at or below this is labelled high churn risk (0.0–1.0)
    pub threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("Scaler.json"),
            model_path: PathBuf::from("Model.onnx"),
            risk: RiskConfig::default(),
            output: OutputConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> ChurnResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|e| ChurnError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: AppConfig = serde_json::from_str(&data).map_err(|e| ChurnError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !(0.0..=1.0).contains(&config.risk.threshold) {
            return Err(ChurnError::Config {
                path: path.to_path_buf(),
                reason: format!("risk.threshold {} outside [0, 1]", config.risk.threshold),
            });
        }
        Ok(config)
    }

    /// Resolve artifact paths relative to the config file's directory.
    pub fn resolve_paths(mut self, config_path: &Path) -> Self {
        if let Some(base) = config_path.parent() {
            if self.scaler_path.is_relative() {
                self.scaler_path = base.join(&self.scaler_path);
            }
            if self.model_path.is_relative() {
                self.model_path = base.join(&self.model_path);
            }
        }
        self
    }
}
