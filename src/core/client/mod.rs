//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::FxError;
use constants::{
    DEFAULT_BASE_CURRENCY, DEFAULT_FALLBACK_SOURCE, DEFAULT_PRIMARY_SOURCE, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the exchange-rate feeds.
///
/// Holds the ordered list of source bases. A full request URL is the source base with the
/// base currency code appended, e.g. `https://open.er-api.com/v6/latest/EUR`.
#[derive(Debug, Clone)]
pub struct RatesClient {
    http: Client,
    sources: Vec<Url>,
    base_currency: String,
}

impl Default for RatesClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl RatesClient {
    /// Create a new builder.
    pub fn builder() -> RatesClientBuilder {
        RatesClientBuilder::default()
    }

    /// The currency every fetched rate is relative to.
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Source bases in the order they are tried.
    pub fn sources(&self) -> &[Url] {
        &self.sources
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Full request URLs for `base_currency`, one per source, in fallback order.
    pub(crate) fn source_urls(&self, base_currency: &str) -> Result<Vec<Url>, FxError> {
        self.sources
            .iter()
            .map(|base| base.join(base_currency).map_err(FxError::from))
            .collect()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct RatesClientBuilder {
    user_agent: Option<String>,
    primary_source: Option<Url>,
    fallback_source: Option<Url>,
    base_currency: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl RatesClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the primary feed base (e.g., `https://open.er-api.com/v6/latest/`).
    #[must_use]
    pub fn primary_source(mut self, url: Url) -> Self {
        self.primary_source = Some(url);
        self
    }

    /// Override the backup feed base (e.g., `https://api.exchangerate-api.com/v4/latest/`).
    #[must_use]
    pub fn fallback_source(mut self, url: Url) -> Self {
        self.fallback_source = Some(url);
        self
    }

    /// Currency the rates are requested against. Default: `EUR`.
    #[must_use]
    pub fn base_currency(mut self, code: impl Into<String>) -> Self {
        self.base_currency = Some(code.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `FxError::Url` if a default endpoint fails to parse, `FxError::Data` if the
    /// base currency is blank, or `FxError::Http` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<RatesClient, FxError> {
        let primary = match self.primary_source {
            Some(u) => u,
            None => Url::parse(DEFAULT_PRIMARY_SOURCE)?,
        };
        let fallback = match self.fallback_source {
            Some(u) => u,
            None => Url::parse(DEFAULT_FALLBACK_SOURCE)?,
        };

        let base_currency = self
            .base_currency
            .as_deref()
            .unwrap_or(DEFAULT_BASE_CURRENCY)
            .trim()
            .to_ascii_uppercase();
        if base_currency.is_empty() {
            return Err(FxError::Data("base currency must not be empty".into()));
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(RatesClient {
            http,
            sources: vec![primary, fallback],
            base_currency,
        })
    }
}
