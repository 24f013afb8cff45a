//! Model definitions for tariff readings and subscriber readouts.
//!
//! This module provides the data structures shared by the portal client and
//! the poll coordinator: the tariff keys and units, the per-cycle reading
//! set, the readouts that republish it, and the source trait the coordinator
//! polls through.

pub mod readings;
pub mod readout;
pub mod traits;
pub mod types;

// Re-export commonly used items at the module level
pub use readings::TariffReadings;
pub use readout::{default_readouts, Readout};
pub use traits::TariffSource;
pub use types::{TariffKey, Unit};
