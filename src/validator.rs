//! Pre-submission record validation.

use crate::catalog::fields;
use crate::error::{KcResult, KitCheckError};
use crate::record::ConfigurationRecord;

/// Gate a record before it reaches the predictor.
///
/// Two ordered passes. Completeness first: every declared field must carry
/// a finite numeric value (a NaN or infinity is not a value); an incomplete
/// record reports `MissingField` before any range check runs. Only a fully
/// populated record is then checked for range conformance.
pub fn validate(record: &ConfigurationRecord) -> KcResult<()> {
    for spec in fields() {
        match record.get(spec.name) {
            Some(v) if v.is_finite() => {}
            _ => return Err(KitCheckError::MissingField(spec.name.to_string())),
        }
    }

    for spec in fields() {
        let Some(value) = record.get(spec.name) else {
            continue;
        };
        let below = value < spec.min;
        let above = spec.max.is_some_and(|max| value > max);
        if below || above {
            return Err(KitCheckError::OutOfRange {
                field: spec.name.to_string(),
                value,
                min: spec.min,
                max: spec.max,
            });
        }
    }
    Ok(())
}
