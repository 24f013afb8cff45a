//! Poll coordination between the tariff source and the readouts.
//!
//! One refresh runs at a time: the coordinator asks its source for a fresh
//! reading set under a deadline, classifies the outcome, and republishes to
//! the readouts only when the cycle succeeded. A failed cycle leaves the
//! previously published values in place, so subscribers keep showing the
//! last known tariffs until the next attempt.

use chrono::{DateTime, Local};
use tokio::time::{timeout, Duration};

use crate::error::RefreshError;
use crate::model::{Readout, TariffReadings, TariffSource};

pub struct PollCoordinator<S> {
    source: S,
    readouts: Vec<Readout>,
    timeout_sec: u64,
    latest: Option<TariffReadings>,
    last_success: Option<DateTime<Local>>,
}

impl<S: TariffSource> PollCoordinator<S> {
    pub fn new(source: S, readouts: Vec<Readout>, timeout_sec: u64) -> Self {
        Self {
            source,
            readouts,
            timeout_sec,
            latest: None,
            last_success: None,
        }
    }

    /// Runs one bounded refresh cycle.
    ///
    /// The deadline covers the whole fetch, a mid-flight reauthentication
    /// included. Failures come back classified: an unresolvable session
    /// expiry is `AuthRequired` (terminal), the deadline is `TimedOut`, and
    /// everything else is `Transient`; the latter two are retried on the
    /// next scheduled cycle.
    pub async fn refresh(&mut self) -> Result<&TariffReadings, RefreshError> {
        tracing::debug!("refreshing tariffs");
        let deadline = Duration::from_secs(self.timeout_sec);

        let readings = match timeout(deadline, self.source.fetch_tariffs()).await {
            Err(_) => return Err(RefreshError::TimedOut(self.timeout_sec)),
            Ok(Err(err)) if err.is_auth_failure() => return Err(RefreshError::AuthRequired(err)),
            Ok(Err(err)) => return Err(RefreshError::Transient(err)),
            Ok(Ok(readings)) => readings,
        };

        if readings.is_empty() {
            // Technically a success, but in practice it means the portal
            // changed its markup under us.
            tracing::warn!("refresh produced no recognized tariff rows");
        }

        self.publish(&readings);
        self.last_success = Some(Local::now());
        Ok(self.latest.insert(readings))
    }

    /// Reassigns every readout from the new set and logs the published state.
    fn publish(&mut self, readings: &TariffReadings) {
        for readout in &mut self.readouts {
            readout.update(readings);
            match readout.value() {
                Some(value) => {
                    tracing::info!(
                        "{} [{}]: {} {}",
                        readout.name(),
                        readout.key(),
                        value,
                        readout.unit()
                    );
                }
                None => {
                    tracing::warn!(
                        "{} [{}]: no value in this refresh",
                        readout.name(),
                        readout.key()
                    );
                }
            }
        }
    }

    /// The reading set of the last successful refresh, if there has been one.
    pub fn latest(&self) -> Option<&TariffReadings> {
        self.latest.as_ref()
    }

    pub fn last_success(&self) -> Option<DateTime<Local>> {
        self.last_success
    }

    pub fn readouts(&self) -> &[Readout] {
        &self.readouts
    }
}
