//! One synchronous request: raw input → features → scale → predict → label.

use crate::error::ChurnResult;
use crate::features::{FeatureBuilder, RawCustomerInput};
use crate::model::ChurnPredictor;
use crate::risk::{Assessment, RiskEngine};
use chrono::Utc;
use uuid::Uuid;

pub struct ChurnService {
    builder: FeatureBuilder,
    predictor: ChurnPredictor,
    risk: RiskEngine,
}

impl ChurnService {
    pub fn new(predictor: ChurnPredictor, risk: RiskEngine) -> Self {
        Self {
            builder: FeatureBuilder::new(),
            predictor,
            risk,
        }
    }

    /// Errors abort this request only; no partial assessment is returned.
    pub fn assess(&self, raw: &RawCustomerInput) -> ChurnResult<Assessment> {
        let features = self.builder.build(raw)?;
        let probability = self.predictor.predict(&features)?;
        Ok(self.risk.assess(
            Uuid::new_v4().to_string(),
            features,
            probability,
            Utc::now().timestamp_millis(),
        ))
    }
}
