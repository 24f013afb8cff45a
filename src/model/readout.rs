use super::{TariffKey, TariffReadings, Unit};

/// A named subscriber bound to exactly one tariff key.
///
/// A readout caches the value from the last published reading set. The
/// coordinator only publishes successful refreshes, so a failed cycle leaves
/// the cache untouched; a successful cycle that carries no entry for the key
/// clears it.
#[derive(Debug, Clone)]
pub struct Readout {
    name: &'static str,
    key: TariffKey,
    unit: Unit,
    value: Option<f64>,
}

impl Readout {
    pub fn new(name: &'static str, key: TariffKey, unit: Unit) -> Self {
        Self {
            name,
            key,
            unit,
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn key(&self) -> TariffKey {
        self.key
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Reassigns the cached value from a fresh reading set.
    pub fn update(&mut self, readings: &TariffReadings) {
        self.value = readings.get(self.key);
    }
}

/// The five readouts the portal feeds, one per tariff key.
pub fn default_readouts() -> Vec<Readout> {
    vec![
        Readout::new("Low tariff", TariffKey::Low, Unit::EuroPerKwh),
        Readout::new("High tariff", TariffKey::High, Unit::EuroPerKwh),
        Readout::new("Return low tariff", TariffKey::ReturnLow, Unit::EuroPerKwh),
        Readout::new("Return high tariff", TariffKey::ReturnHigh, Unit::EuroPerKwh),
        Readout::new("Gas tariff", TariffKey::Gas, Unit::EuroPerCubicMeter),
    ]
}
