//! Error taxonomy shared by the feature builder, the inference invoker and the front end.

use std::path::PathBuf;

/// Errors raised while building features, loading artifacts or predicting.
#[derive(Debug, thiserror::Error)]
pub enum ChurnError {
    /// A raw input field is outside its declared domain.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Scaler or classifier artifact missing, unreadable or malformed.
    #[error("failed to load artifact {}: {reason}", .path.display())]
    ArtifactLoad { path: PathBuf, reason: String },

    /// Shape mismatch or runtime failure while scaling or classifying.
    #[error("inference failed: {reason}")]
    Inference { reason: String },

    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

pub type ChurnResult<T> = Result<T, ChurnError>;

impl ChurnError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn artifact(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ArtifactLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn inference(reason: impl ToString) -> Self {
        Self::Inference {
            reason: reason.to_string(),
        }
    }

    /// True for errors that abort a single request but leave the process serving.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Inference { .. })
    }
}
