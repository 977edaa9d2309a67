//! Risk labelling of classifier output.

mod engine;

pub use engine::{Assessment, Probability, RiskEngine, RiskLabel};
