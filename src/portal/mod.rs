mod client;
mod html;
mod parser;

pub use client::Client;

// Endpoint paths are part of the portal contract; the client requests them
// and the tests mock them.
pub(crate) const LOGIN_PATH: &str = "/account/log-in.asp";
pub(crate) const TARIFF_FORM_PATH: &str = "/mijn-energie/tarieven/index.asp";
pub(crate) const TARIFF_RESULTS_PATH: &str = "/mijn-energie/tarieven/tarieven.asp";
