use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::redirect::Policy;
use reqwest::{Client as HttpClient, Response, StatusCode};
use scraper::Html;

use crate::config::PortalConfig;
use crate::error::{PortalError, Result};
use crate::model::{TariffReadings, TariffSource};
use crate::portal::{parser, LOGIN_PATH, TARIFF_FORM_PATH, TARIFF_RESULTS_PATH};

const PRODUCTION_BASE_URL: &str = "https://www.unitedconsumers.com/mijn-unitedconsumers";

/// Value of the submit button the login form posts alongside the credentials.
const LOGIN_BUTTON: &str = "Inloggen";

/// Credentials as last accepted by the portal. Only a confirmed successful
/// login replaces them.
struct Credentials {
    username: String,
    password: String,
}

/// Authenticated client for the Mijn UnitedConsumers portal.
///
/// The session lives in a cookie jar shared by two HTTP clients. The portal
/// signals an expired session differently per request kind, which is why two
/// clients exist: `direct` never follows redirects, because the login 302 and
/// the form page 301 are signals, not navigation; `follow` does follow them,
/// because for the results POST the signal is the final URL landing back on
/// the login page.
pub struct Client {
    direct: HttpClient,
    follow: HttpClient,
    base_url: String,
    credentials: Option<Credentials>,
}

impl Client {
    pub fn new(config: PortalConfig) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let direct = HttpClient::builder()
            .redirect(Policy::none())
            .cookie_provider(Arc::clone(&jar))
            .build()?;
        let follow = HttpClient::builder().cookie_provider(jar).build()?;

        Ok(Self {
            direct,
            follow,
            base_url: config
                .base_url
                .unwrap_or_else(|| PRODUCTION_BASE_URL.to_string()),
            credentials: None,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn login_url(&self) -> String {
        self.url(LOGIN_PATH)
    }

    /// Submits the credentials to the login endpoint.
    ///
    /// The portal redirects (302) on success and re-renders the login form
    /// with a 200 otherwise, so the redirect status is the only success
    /// signal. The credentials are stored for silent reuse only when it is
    /// seen; a rejected attempt leaves any previously stored pair in place.
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<bool> {
        let authenticated = self.submit_login(username, password).await?;
        if authenticated {
            self.credentials = Some(Credentials {
                username: username.to_string(),
                password: password.to_string(),
            });
        }
        Ok(authenticated)
    }

    async fn submit_login(&self, username: &str, password: &str) -> Result<bool> {
        let response = self
            .direct
            .post(self.login_url())
            .form(&[
                ("username", username),
                ("password", password),
                ("login", LOGIN_BUTTON),
            ])
            .send()
            .await?;

        Ok(response.status() == StatusCode::FOUND)
    }

    /// Replays the login with the stored credentials, if there are any.
    async fn reauthenticate(&self) -> Result<bool> {
        let Some(credentials) = &self.credentials else {
            return Ok(false);
        };
        tracing::debug!("session expired, reauthenticating with stored credentials");
        self.submit_login(&credentials.username, &credentials.password)
            .await
    }

    /// Fetches the current tariff reading set.
    ///
    /// Two chained pages: the first serves the address form whose hidden
    /// fields must be replayed verbatim, the second renders the tariff rows
    /// for that address. Each step silently reauthenticates at most once when
    /// the portal reports the session expired; if that happens twice in a
    /// row, the second expiry surfaces as whatever the retried page fails
    /// with rather than looping.
    pub async fn fetch_tariffs(&self) -> Result<TariffReadings> {
        let fields = self.fetch_form_fields().await?;
        let response = self
            .post_form_with_reauth(TARIFF_RESULTS_PATH, &fields)
            .await?;
        let body = response.text().await?;
        let document = Html::parse_document(&body);
        Ok(parser::extract_tariffs(&document)?)
    }

    async fn fetch_form_fields(&self) -> Result<Vec<(String, String)>> {
        let response = self.get_with_reauth(TARIFF_FORM_PATH).await?;
        let body = response.text().await?;
        let document = Html::parse_document(&body);
        Ok(parser::extract_form_fields(&document)?)
    }

    /// GET with a single reauthenticate-and-retry. On GET the portal answers
    /// an expired session with a bare 301 to the login page.
    async fn get_with_reauth(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        let response = self.direct.get(&url).send().await?;

        if response.status() != StatusCode::MOVED_PERMANENTLY {
            return Ok(response);
        }

        if !self.reauthenticate().await? {
            return Err(PortalError::AuthFailed);
        }
        Ok(self.direct.get(&url).send().await?)
    }

    /// POST with a single reauthenticate-and-retry. On POST there is no
    /// status to look at; the redirect chain is followed and landing on the
    /// login URL is the expiry signal. The asymmetry with the GET case
    /// mirrors the portal's observed behavior.
    async fn post_form_with_reauth(
        &self,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<Response> {
        let url = self.url(path);
        let response = self.follow.post(&url).form(&fields).send().await?;

        if response.url().as_str() != self.login_url() {
            return Ok(response);
        }

        if !self.reauthenticate().await? {
            return Err(PortalError::AuthFailed);
        }
        Ok(self.follow.post(&url).form(&fields).send().await?)
    }
}

#[async_trait]
impl TariffSource for Client {
    async fn fetch_tariffs(&self) -> Result<TariffReadings, PortalError> {
        Client::fetch_tariffs(self).await
    }
}
