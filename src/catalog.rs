//! Static catalog of the 22 component specification fields.
//!
//! The catalog is the single source of truth for field names, display units,
//! validation bounds and default-generation rules. Field order here is the
//! canonical record order: the predictor expects its input vector keyed by
//! these names in this order.

/// How a session default is drawn for a field.
#[derive(Debug, Clone, Copy)]
pub enum DefaultRule {
    /// Uniform draw over `[lo, hi]`, rounded to the field's `decimals`.
    Uniform { lo: f64, hi: f64 },
    /// Uniform pick from a discrete set (e.g. available core counts).
    Choice(&'static [f64]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Canonical identifier, also the key the predictor artifact uses.
    pub name: &'static str,
    /// Display-only unit suffix.
    pub unit: &'static str,
    /// Lower validation bound (inclusive).
    pub min: f64,
    /// Upper validation bound (inclusive). `None` means unbounded above.
    pub max: Option<f64>,
    /// Decimal places for generated defaults. 0 means integer-valued.
    pub decimals: u32,
    pub rule: DefaultRule,
}

impl FieldSpec {
    pub fn is_integer(&self) -> bool {
        self.decimals == 0
    }
}

pub const FIELD_COUNT: usize = 22;

const CORE_CHOICES: [f64; 6] = [2.0, 4.0, 6.0, 8.0, 12.0, 16.0];

static FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec {
        name: "Body_Weight(kg)",
        unit: "kg",
        min: 0.0,
        max: None,
        decimals: 1,
        rule: DefaultRule::Uniform { lo: 1.5, hi: 5.0 },
    },
    FieldSpec {
        name: "Processor_Cores",
        unit: "cores",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Choice(&CORE_CHOICES),
    },
    FieldSpec {
        name: "Processor_Frequency(GHz)",
        unit: "GHz",
        min: 0.0,
        max: None,
        decimals: 1,
        rule: DefaultRule::Uniform { lo: 2.0, hi: 3.6 },
    },
    FieldSpec {
        name: "Sensor_Accuracy",
        unit: "ratio",
        min: 0.0,
        max: Some(1.0),
        decimals: 3,
        rule: DefaultRule::Uniform { lo: 0.70, hi: 0.99 },
    },
    FieldSpec {
        name: "Sensor_Resolution(px)",
        unit: "px",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 720.0, hi: 4096.0 },
    },
    FieldSpec {
        name: "Actuator_MaxSpeed(mm/s)",
        unit: "mm/s",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 80.0, hi: 200.0 },
    },
    FieldSpec {
        name: "Actuator_Force(N)",
        unit: "N",
        min: 0.0,
        max: None,
        decimals: 1,
        rule: DefaultRule::Uniform { lo: 100.0, hi: 500.0 },
    },
    FieldSpec {
        name: "Cooling_Power(W)",
        unit: "W",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 30.0, hi: 150.0 },
    },
    FieldSpec {
        name: "PowerSplitter_Efficiency",
        unit: "ratio",
        min: 0.0,
        max: Some(1.0),
        decimals: 3,
        rule: DefaultRule::Uniform { lo: 0.80, hi: 0.99 },
    },
    FieldSpec {
        name: "PowerSplitter_MaxOutput(W)",
        unit: "W",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 100.0, hi: 500.0 },
    },
    FieldSpec {
        name: "FluidFlowUnit_FlowRate(L/min)",
        unit: "L/min",
        min: 0.0,
        max: None,
        decimals: 2,
        rule: DefaultRule::Uniform { lo: 1.0, hi: 5.0 },
    },
    FieldSpec {
        name: "FluidFlowUnit_MaxPressure(bar)",
        unit: "bar",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 5.0, hi: 30.0 },
    },
    FieldSpec {
        name: "LoadBearingFrame_StressTolerance(kN)",
        unit: "kN",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 50.0, hi: 200.0 },
    },
    FieldSpec {
        name: "MotorGeneratorUnit_Torque(Nm)",
        unit: "Nm",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 50.0, hi: 200.0 },
    },
    FieldSpec {
        name: "MotorGeneratorUnit_MaxRPM",
        unit: "rpm",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 1000.0, hi: 8000.0 },
    },
    FieldSpec {
        name: "Gearbox_Ratio",
        unit: "ratio",
        min: 0.0,
        max: None,
        decimals: 2,
        rule: DefaultRule::Uniform { lo: 2.0, hi: 6.0 },
    },
    FieldSpec {
        name: "CommInterface_Bandwidth(Mbps)",
        unit: "Mbps",
        min: 0.0,
        max: None,
        decimals: 0,
        rule: DefaultRule::Uniform { lo: 10.0, hi: 1000.0 },
    },
    FieldSpec {
        name: "ChemicalFeedSystem_Rate(ml/s)",
        unit: "ml/s",
        min: 0.0,
        max: None,
        decimals: 2,
        rule: DefaultRule::Uniform { lo: 0.5, hi: 2.0 },
    },
    FieldSpec {
        name: "ChemicalFeedSystem_pH",
        unit: "pH",
        min: 0.0,
        max: Some(14.0),
        decimals: 1,
        rule: DefaultRule::Uniform { lo: 2.0, hi: 10.0 },
    },
    FieldSpec {
        name: "Total_Power_Consumption(W)",
        unit: "W",
        min: 0.0,
        max: None,
        decimals: 1,
        rule: DefaultRule::Uniform { lo: 50.0, hi: 300.0 },
    },
    FieldSpec {
        name: "Thermal_Load(W)",
        unit: "W",
        min: 0.0,
        max: None,
        decimals: 1,
        rule: DefaultRule::Uniform { lo: 0.0, hi: 200.0 },
    },
    FieldSpec {
        name: "System_Cost($)",
        unit: "$",
        min: 0.0,
        max: None,
        decimals: 1,
        rule: DefaultRule::Uniform { lo: 500.0, hi: 5000.0 },
    },
];

/// All declared fields, in canonical record order.
pub fn fields() -> &'static [FieldSpec] {
    &FIELDS
}

pub fn spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_22_entries() {
        assert_eq!(fields().len(), FIELD_COUNT);
    }

    #[test]
    fn generation_ranges_sit_inside_validation_bounds() {
        for spec in fields() {
            match spec.rule {
                DefaultRule::Uniform { lo, hi } => {
                    assert!(lo <= hi, "{}: lo > hi", spec.name);
                    assert!(lo >= spec.min, "{}: lo below min", spec.name);
                    if let Some(max) = spec.max {
                        assert!(hi <= max, "{}: hi above max", spec.name);
                    }
                }
                DefaultRule::Choice(set) => {
                    assert!(!set.is_empty(), "{}: empty choice set", spec.name);
                    for &v in set {
                        assert!(v >= spec.min, "{}: choice below min", spec.name);
                    }
                }
            }
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in fields().iter().enumerate() {
            for b in &fields()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        let spec = spec("ChemicalFeedSystem_pH").unwrap();
        assert_eq!(spec.max, Some(14.0));
        assert!(super::spec("Unknown_Field").is_none());
    }
}
