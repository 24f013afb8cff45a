use std::fmt;

/// Identifies one of the tariffs published by the portal.
///
/// The `Display` form is the wire name subscribers bind to; it is part of
/// the readout contract and never changes with the label text on the page.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TariffKey {
    /// Off-peak electricity price
    Low,
    /// Normal-rate electricity price
    High,
    /// Feed-in price for off-peak electricity
    ReturnLow,
    /// Feed-in price for normal-rate electricity
    ReturnHigh,
    /// Gas price
    Gas,
}

impl TariffKey {
    /// Every key, in the order the readouts are registered.
    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::High,
        Self::ReturnLow,
        Self::ReturnHigh,
        Self::Gas,
    ];
}

impl fmt::Display for TariffKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TariffKey::Low => write!(f, "low"),
            TariffKey::High => write!(f, "high"),
            TariffKey::ReturnLow => write!(f, "ret-low"),
            TariffKey::ReturnHigh => write!(f, "ret-high"),
            TariffKey::Gas => write!(f, "gas"),
        }
    }
}

/// Unit of measure attached to a readout.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Unit {
    /// Euro per kilowatt-hour, for electricity prices
    EuroPerKwh,
    /// Euro per cubic meter, for gas prices
    EuroPerCubicMeter,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::EuroPerKwh => write!(f, "EUR/kWh"),
            Unit::EuroPerCubicMeter => write!(f, "EUR/m³"),
        }
    }
}
