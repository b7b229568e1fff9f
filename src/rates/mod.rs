mod api;
mod model;
mod wire;

pub use model::RateTable;

use crate::{FxError, RatesClient};

/// Fetches a fresh rate table for the client's base currency.
///
/// The primary source is tried first; on any failure the fallback source is tried once.
///
/// # Errors
///
/// Returns `FxError::AllSourcesFailed` when no source produced a usable table, or
/// `FxError::Url` if a source URL cannot be built.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err, fields(base = %client.base_currency())))]
pub async fn fetch_rates(client: &RatesClient) -> Result<RateTable, FxError> {
    RatesBuilder::new(client).fetch().await
}

/// A builder for a single rate-table request.
pub struct RatesBuilder {
    client: RatesClient,
    base_currency: String,
}

impl RatesBuilder {
    /// Creates a new `RatesBuilder` using the client's sources and base currency.
    pub fn new(client: &RatesClient) -> Self {
        Self {
            client: client.clone(),
            base_currency: client.base_currency().to_string(),
        }
    }

    /// Requests rates against another base currency for this call only.
    #[must_use]
    pub fn base_currency(mut self, code: impl AsRef<str>) -> Self {
        self.base_currency = model::normalize_code(code.as_ref());
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `FxError::AllSourcesFailed` if every source fails, or `FxError::Url` if a
    /// source URL cannot be built.
    pub async fn fetch(self) -> Result<RateTable, FxError> {
        api::fetch_rates(&self.client, &self.base_currency).await
    }
}
