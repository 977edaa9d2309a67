//! Structured logging.

mod format;

pub use format::{PredictionLine, StructuredLogger};
