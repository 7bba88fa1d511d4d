//! The external compatibility predictor.
//!
//! The pipeline treats the predictor as opaque: one capability (`score`),
//! fallible, pure over the full 22-field vector. The bundled implementation
//! is a linear model loaded from a JSON artifact, with embedded fallback
//! coefficients for running without one.

use crate::error::{KcResult, KitCheckError};
use crate::record::ConfigurationRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Raw compatibility score in the predictor's output domain (0.0–1.0).
pub trait Predictor {
    fn score(&self, record: &ConfigurationRecord) -> KcResult<f64>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: HashMap<String, f64>,
}

// Fallback coefficients, roughly scale-matched to each field's typical
// magnitude. Thermal, power draw and cost pull the score down.
const DEFAULT_INTERCEPT: f64 = 0.35;
const DEFAULT_COEFFICIENTS: &[(&str, f64)] = &[
    ("Body_Weight(kg)", -0.004),
    ("Processor_Cores", 0.005),
    ("Processor_Frequency(GHz)", 0.02),
    ("Sensor_Accuracy", 0.08),
    ("Sensor_Resolution(px)", 0.00002),
    ("Actuator_MaxSpeed(mm/s)", 0.0002),
    ("Actuator_Force(N)", 0.0001),
    ("Cooling_Power(W)", 0.0004),
    ("PowerSplitter_Efficiency", 0.06),
    ("PowerSplitter_MaxOutput(W)", 0.0001),
    ("FluidFlowUnit_FlowRate(L/min)", 0.008),
    ("FluidFlowUnit_MaxPressure(bar)", 0.001),
    ("LoadBearingFrame_StressTolerance(kN)", 0.0002),
    ("MotorGeneratorUnit_Torque(Nm)", 0.0002),
    ("MotorGeneratorUnit_MaxRPM", 0.000005),
    ("Gearbox_Ratio", 0.005),
    ("CommInterface_Bandwidth(Mbps)", 0.00004),
    ("ChemicalFeedSystem_Rate(ml/s)", 0.01),
    ("ChemicalFeedSystem_pH", 0.002),
    ("Total_Power_Consumption(W)", -0.0003),
    ("Thermal_Load(W)", -0.0005),
    ("System_Cost($)", -0.00002),
];

impl LinearModel {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KcResult<Self> {
        let content = fs::read_to_string(&path)?;
        let model: LinearModel = serde_json::from_str(&content)?;
        info!(
            "Loaded model artifact from {:?} ({} coefficients)",
            path.as_ref(),
            model.coefficients.len()
        );
        Ok(model)
    }

    /// Embedded coefficients for running without a model artifact on disk.
    pub fn new_with_defaults() -> Self {
        Self {
            intercept: DEFAULT_INTERCEPT,
            coefficients: DEFAULT_COEFFICIENTS
                .iter()
                .map(|&(name, c)| (name.to_string(), c))
                .collect(),
        }
    }
}

impl Predictor for LinearModel {
    fn score(&self, record: &ConfigurationRecord) -> KcResult<f64> {
        let mut acc = self.intercept;
        for (name, value) in record.iter() {
            let coeff = self.coefficients.get(name).ok_or_else(|| {
                KitCheckError::PredictionFailed(format!(
                    "Model artifact has no coefficient for field '{}'",
                    name
                ))
            })?;
            acc += coeff * value;
        }

        if !acc.is_finite() {
            return Err(KitCheckError::PredictionFailed(
                "Model produced a non-finite score".to_string(),
            ));
        }

        // Linear sums can leave the predictor's observed output domain.
        let score = acc.clamp(0.0, 1.0);
        debug!("Raw prediction {:.4} (clamped to {:.4})", acc, score);
        Ok(score)
    }
}
