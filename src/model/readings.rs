use std::collections::HashMap;

use crate::model::types::TariffKey;

/// One fetch cycle's worth of tariff values.
///
/// The set is rebuilt from scratch on every fetch and may be partial: a row
/// that is missing from the page or fails to parse simply contributes no
/// entry. Consumers distinguish "no value this cycle" from zero through
/// `get` returning `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TariffReadings {
    values: HashMap<TariffKey, f64>,
}

impl TariffReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value for a key. A repeated key keeps the later value.
    pub fn insert(&mut self, key: TariffKey, value: f64) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: TariffKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
