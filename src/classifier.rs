//! Score-to-tier classification.

use crate::error::{KcResult, KitCheckError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Excellent,
    Good,
    Low,
}

impl Tier {
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => "meets all critical requirements.",
            Tier::Good => "consider optimizing power and thermal characteristics.",
            Tier::Low => "review component specifications and system parameters.",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Low => "Low",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictionResult {
    pub raw_score: f64,
    /// Raw score scaled to the 0–100 display percentage.
    pub display_score: f64,
    pub tier: Tier,
}

/// Map a raw predictor score to its compatibility tier.
///
/// Thresholds are strict: exactly 80.0 on the display scale is Good, not
/// Excellent, and exactly 60.0 is Low. A non-finite score from a
/// malfunctioning predictor is surfaced as a prediction fault rather than
/// silently bucketed.
pub fn classify(raw_score: f64) -> KcResult<PredictionResult> {
    if !raw_score.is_finite() {
        return Err(KitCheckError::PredictionFailed(format!(
            "Predictor returned a non-finite score: {}",
            raw_score
        )));
    }

    let display_score = raw_score * 100.0;
    let tier = if display_score > 80.0 {
        Tier::Excellent
    } else if display_score > 60.0 {
        Tier::Good
    } else {
        Tier::Low
    };

    Ok(PredictionResult {
        raw_score,
        display_score,
        tier,
    })
}
