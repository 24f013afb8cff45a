//! Error types for the UnitedConsumers tariff monitor.
//!
//! Portal failures split into two groups that callers treat very differently:
//! a session expiry that the stored credentials could not resolve (terminal,
//! nothing works until new credentials are configured) and everything else
//! (transient, retried on the next poll). `RefreshError` is the coordinator's
//! view of that split.

use thiserror::Error;

/// Result type alias for portal operations.
pub type Result<T, E = PortalError> = std::result::Result<T, E>;

/// Errors raised while talking to the Mijn UnitedConsumers portal.
#[derive(Error, Debug)]
pub enum PortalError {
    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A detected session expiry could not be resolved with the stored credentials
    #[error("reauthentication with stored credentials failed")]
    AuthFailed,

    /// A page did not have the expected markup
    #[error("HTML parsing error: {0}")]
    Parse(#[from] ParseError),
}

/// HTML parsing errors.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Element not found in HTML
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    /// Invalid CSS selector
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Outcome classification for a coordinator refresh cycle.
#[derive(Error, Debug)]
pub enum RefreshError {
    /// The stored credentials no longer work; polling must stop until new ones are configured
    #[error("reauthentication required")]
    AuthRequired(#[source] PortalError),

    /// The refresh did not finish within the poll deadline
    #[error("refresh timed out after {0} seconds")]
    TimedOut(u64),

    /// Any other failure; the next scheduled refresh tries again
    #[error("refresh failed: {0}")]
    Transient(PortalError),
}

impl PortalError {
    /// True for the one failure that new credentials are required to resolve.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthFailed)
    }
}

impl ParseError {
    /// Creates an element not found error.
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }

    /// Creates an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: err.to_string(),
        }
    }
}

impl RefreshError {
    /// True when polling should stop instead of retrying on the next tick.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::AuthRequired(_))
    }
}
