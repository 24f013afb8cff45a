//! UnitedConsumers Tariff Monitor
//!
//! This application signs in to the Mijn UnitedConsumers consumer portal,
//! scrapes the contracted energy tariffs from the "Mijn energie" pages and
//! republishes them as a set of named readouts on a fixed schedule.
//!
//! # Architecture
//!
//! A single poll loop drives a `PollCoordinator`, which asks the portal
//! client for a fresh reading set once per interval. The client holds the
//! session cookie and silently re-authenticates once when the portal
//! expires it mid-fetch.
//!
//! # Features
//!
//! - Transparent session renewal with the stored credentials
//! - Readouts keep the last good values across transient failures
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Timeout protection for hung refresh cycles

mod config;
mod coordinator;
mod error;
mod model;
mod portal;


use crate::coordinator::PollCoordinator;
use crate::model::{default_readouts, TariffSource};
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::{interval_at, Duration, Instant};

/// Application entry point.
///
/// Loads configuration, performs the initial login and runs the poll loop
/// with signal handling for graceful shutdown. Startup fails hard when the
/// portal rejects the configured credentials, since polling could never
/// succeed afterwards.
#[tokio::main]
async fn main() {
    let app_config = config::load_app_config().expect("Failed to load AppConfig");
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let poll_config = config::load_poll_config().expect("Failed to load PollConfig");
    let portal_config = config::load_portal_config().expect("Failed to load PortalConfig");
    let username = portal_config.username.clone();
    let password = portal_config.password.clone();

    let mut client = portal::Client::new(portal_config).expect("Failed to build portal client");
    match client.authenticate(&username, &password).await {
        Ok(true) => tracing::info!("Authenticated against Mijn UnitedConsumers"),
        Ok(false) => {
            tracing::error!("The portal rejected the configured credentials");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Could not reach the login endpoint: {}", e);
            std::process::exit(1);
        }
    }

    let mut coordinator = PollCoordinator::new(client, default_readouts(), poll_config.timeout_sec);
    tracing::info!("Registered {} readouts", coordinator.readouts().len());

    // First refresh runs immediately; the ticker takes over afterwards.
    if !refresh_once(&mut coordinator).await {
        return;
    }

    let period = Duration::from_secs(poll_config.interval_sec);
    let mut ticks = interval_at(Instant::now() + period, period);
    let mut sig_term = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
    tracing::info!(
        "Polling tariffs every {}s... Press Ctrl-C or send SIGTERM to terminate.",
        poll_config.interval_sec
    );
    loop {
        tokio::select! {
            // Handle SIGTERM for graceful shutdown in containers
            _ = sig_term.recv() => {
                tracing::info!("Received SIGTERM. Exiting...");
                break;
            }
            // Handle Ctrl-C for manual termination
            _ = ctrl_c() => {
                tracing::info!("Received SIGINT. Exiting...");
                break;
            }
            _ = ticks.tick() => {
                if !refresh_once(&mut coordinator).await {
                    break;
                }
            }
        }
    }

    if let Some(at) = coordinator.last_success() {
        tracing::info!(
            "Shutting down; last successful refresh at {}",
            at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

/// Runs one refresh cycle and reports whether polling should continue.
///
/// # Behavior
///
/// - Success publishes the new readings and keeps polling
/// - Terminal failures (credentials no longer accepted) stop the loop, so
///   the operator can reconfigure and restart
/// - Transient failures are logged and the loop keeps the previous values
async fn refresh_once<S: TariffSource>(coordinator: &mut PollCoordinator<S>) -> bool {
    let outcome = coordinator.refresh().await.map(|readings| readings.len());
    match outcome {
        Ok(count) => {
            tracing::debug!("Refresh published {} readings", count);
            true
        }
        Err(e) if e.is_terminal() => {
            tracing::error!("{}; exiting so new credentials can be configured", e);
            false
        }
        Err(e) => {
            if coordinator.latest().is_some() {
                tracing::warn!(
                    "{}; readouts keep the previous refresh until the next attempt",
                    e
                );
            } else {
                tracing::warn!("{}; no readings have been published yet", e);
            }
            true
        }
    }
}
