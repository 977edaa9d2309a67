//! Churn Predictor — OTT subscription churn-risk scoring.
//!
//! Modular structure:
//! - [`features`] — Raw customer attributes → fixed-order feature vector
//! - [`model`] — Fitted scaler + classifier (ONNX or dense JSON) inference
//! - [`risk`] — Probability → risk label
//! - [`service`] — One request end to end
//! - [`form`] — Terminal form and result panel
//! - [`logging`] — Structured logging

pub mod config;
pub mod error;
pub mod features;
pub mod form;
pub mod logging;
pub mod model;
pub mod risk;
pub mod service;

pub use config::AppConfig;
pub use error::{ChurnError, ChurnResult};
pub use features::{FeatureBuilder, FeatureVector, RawCustomerInput};
pub use model::{Artifacts, ChurnPredictor};
pub use risk::{Assessment, Probability, RiskEngine, RiskLabel};
pub use service::ChurnService;
pub use logging::StructuredLogger;
