//! The assembled configuration record.

use crate::catalog::fields;
use crate::defaults::SessionDefaults;
use serde::Serialize;
use std::collections::HashMap;

/// One full kit configuration: every declared field paired with its current
/// value, in canonical catalog order. Rebuilt from scratch on every
/// interaction cycle; the session defaults outlive it.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationRecord {
    entries: Vec<(&'static str, f64)>,
}

impl ConfigurationRecord {
    /// Merge user-edited values with session defaults into one record.
    ///
    /// Purely structural: an override wins where present, otherwise the
    /// session default fills the slot. Validation happens separately.
    pub fn assemble(overrides: &HashMap<String, f64>, session: &mut SessionDefaults) -> Self {
        let entries = fields()
            .iter()
            .map(|spec| {
                let value = overrides
                    .get(spec.name)
                    .copied()
                    .unwrap_or_else(|| session.value_for(spec));
                (spec.name, value)
            })
            .collect();
        Self { entries }
    }

    /// Build a record directly from entries. Intended for tests and for
    /// callers that already hold a complete value set.
    pub fn from_entries(entries: Vec<(&'static str, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
