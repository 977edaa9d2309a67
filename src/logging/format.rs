//! Log setup and JSON line output. Logs go to stderr; stdout belongs to the form.

use crate::config::LogConfig;
use crate::risk::Assessment;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Flat record of one assessment, one JSON object per line.
#[derive(Serialize)]
pub struct PredictionLine<'a> {
    pub ts: i64,
    pub request_id: &'a str,
    pub probability: f64,
    pub label: &'a str,
    pub features: serde_json::Map<String, serde_json::Value>,
}

impl<'a> PredictionLine<'a> {
    pub fn from_assessment(a: &'a Assessment) -> Self {
        let features = a
            .features
            .named()
            .map(|(name, v)| (name.to_string(), serde_json::json!(v)))
            .collect();
        Self {
            ts: a.ts,
            request_id: &a.request_id,
            probability: a.probability.value(),
            label: a.label.as_str(),
            features,
        }
    }
}

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber. `RUST_LOG` overrides `config.level`; exactly one
    /// of the JSON or plain layers is active. Fails if a subscriber is already set.
    pub fn init(config: &LogConfig) -> Result<(), TryInitError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
        let json = config.json.then(|| {
            fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr)
        });
        let plain = (!config.json)
            .then(|| fmt::layer().with_target(false).with_writer(std::io::stderr));
        tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(plain)
            .try_init()
    }

    /// Emit a single JSON line without going through tracing.
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(event)?;
        writeln!(w, "{}", line)
    }
}
