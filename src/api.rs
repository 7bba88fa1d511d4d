//! End-to-end prediction pipeline.

use crate::classifier::{classify, PredictionResult};
use crate::defaults::SessionDefaults;
use crate::error::{KcResult, KitCheckError};
use crate::predictor::Predictor;
use crate::record::ConfigurationRecord;
use crate::validator::validate;
use std::collections::HashMap;
use tracing::{info, warn};

/// What one "run prediction" trigger hands back to the presentation layer:
/// the assembled configuration (for display) and the classified result.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub record: ConfigurationRecord,
    pub result: PredictionResult,
}

/// Run one synchronous prediction cycle: assemble, gate, score, classify.
///
/// `overrides` holds the user-edited values; everything else comes from the
/// session baseline. Every failure converts to a `KitCheckError` at this
/// boundary; the session stays usable for the next attempt.
pub fn run_prediction(
    session: &mut SessionDefaults,
    predictor: &dyn Predictor,
    overrides: &HashMap<String, f64>,
) -> KcResult<PredictionOutcome> {
    let record = ConfigurationRecord::assemble(overrides, session);
    validate(&record)?;

    let raw_score = predictor.score(&record).map_err(|e| match e {
        KitCheckError::PredictionFailed(_) => e,
        other => KitCheckError::PredictionFailed(other.to_string()),
    })?;

    let result = classify(raw_score)?;
    if result.display_score <= 60.0 {
        warn!(
            "Low compatibility ({:.1}%) for assembled configuration",
            result.display_score
        );
    } else {
        info!(
            "Predicted compatibility {:.1}% ({})",
            result.display_score, result.tier
        );
    }

    Ok(PredictionOutcome { record, result })
}
