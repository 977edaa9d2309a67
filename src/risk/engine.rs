//! Turns the classifier's probability into a risk label using the configured threshold.

use crate::config::RiskConfig;
use crate::error::{ChurnError, ChurnResult};
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifier output, guaranteed to lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Probability(f64);

impl TryFrom<f64> for Probability {
    type Error = String;

    fn try_from(p: f64) -> Result<Self, Self::Error> {
        Probability::new(p).ok_or_else(|| format!("probability {p} outside [0, 1]"))
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> f64 {
        p.0
    }
}

impl Probability {
    pub fn new(p: f64) -> Option<Self> {
        (0.0..=1.0).contains(&p).then_some(Self(p))
    }

    /// NaN is an inference failure; finite values outside [0, 1] are clamped.
    pub fn from_model_output(raw: f32) -> ChurnResult<Self> {
        if raw.is_nan() {
            return Err(ChurnError::inference("classifier returned NaN"));
        }
        Ok(Self(f64::from(raw).clamp(0.0, 1.0)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whole percent, truncated (progress bar fill).
    pub fn whole_percent(&self) -> u8 {
        (self.0 * 100.0) as u8
    }
}

impl fmt::Display for Probability {
    /// Percentage with two decimals, e.g. `73.12%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.0)
    }
}

/// The model's output is read with the reference polarity: at or below the
/// threshold is high risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    High,
    Low,
}

impl RiskLabel {
    pub fn from_probability(p: Probability, config: &RiskConfig) -> Self {
        if p.value() <= config.threshold {
            RiskLabel::High
        } else {
            RiskLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::High => "High Churn Risk",
            RiskLabel::Low => "Low Churn Risk",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub request_id: String,
    pub probability: Probability,
    pub label: RiskLabel,
    pub features: FeatureVector,
    pub ts: i64,
}

pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn assess(
        &self,
        request_id: String,
        features: FeatureVector,
        probability: Probability,
        ts: i64,
    ) -> Assessment {
        let label = RiskLabel::from_probability(probability, &self.config);
        Assessment {
            request_id,
            probability,
            label,
            features,
            ts,
        }
    }
}
