//! Churn predictor entrypoint: load artifacts once, then serve the terminal form
//! until input ends. Artifact load failures abort startup; request failures are
//! reported and the form starts over.

use churn_predictor::{
    config::AppConfig,
    form::Form,
    logging::StructuredLogger,
    model::{Artifacts, ChurnPredictor},
    risk::RiskEngine,
    service::ChurnService,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("CHURN_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let config = AppConfig::load(&config_path)?.resolve_paths(&config_path);

    StructuredLogger::init(&config.log)?;

    info!(config = %config_path.display(), "churn predictor starting");

    let artifacts = Artifacts::load(&config.scaler_path, &config.model_path)?;
    info!(
        scaler = %config.scaler_path.display(),
        model = %config.model_path.display(),
        classifier = artifacts.classifier.name(),
        features = artifacts.scaler.n_features(),
        "artifacts loaded"
    );

    let service = ChurnService::new(
        ChurnPredictor::new(Arc::new(artifacts)),
        RiskEngine::new(config.risk.clone()),
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut form = Form::new(stdin.lock(), stdout.lock());
    form.banner()?;

    while let Some(raw) = form.collect()? {
        match service.assess(&raw) {
            Ok(assessment) => {
                info!(
                    request_id = %assessment.request_id,
                    probability = assessment.probability.value(),
                    label = %assessment.label,
                    "prediction"
                );
                form.render(&assessment, config.output.format)?;
            }
            Err(e) if e.is_request_error() => {
                warn!(error = %e, "request failed");
                form.show_error(&e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!("churn predictor stopping");
    Ok(())
}
