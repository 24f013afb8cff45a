use async_trait::async_trait;

use crate::error::{PortalError, Result};
use crate::model::readings::TariffReadings;

/// Trait for types that can produce a fresh tariff reading set.
///
/// The coordinator polls through this seam so tests can substitute a scripted
/// source for the real portal client. Implementors must be thread-safe
/// (Send + Sync); the poll loop holds the source across await points.
#[async_trait]
pub trait TariffSource: Send + Sync {
    /// Fetches the current tariffs from the source.
    ///
    /// Implementations are expected to resolve a session expiry themselves
    /// where they can; `PortalError::AuthFailed` means they could not and
    /// new credentials are required.
    async fn fetch_tariffs(&self) -> Result<TariffReadings, PortalError>;
}
