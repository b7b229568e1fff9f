use futures::future::BoxFuture;

use crate::core::{FxError, RatesClient};
use crate::rates::RateTable;

/// A trait for services that can produce a fresh exchange-rate table.
///
/// This decouples the converter from the HTTP feeds so rendering can be driven from any
/// rate source. It is implemented by [`RatesClient`].
pub trait RatesService: Send + Sync {
    /// Fetches a rate table relative to the service's base currency.
    ///
    /// Every call performs a new acquisition; implementations must not hand back a
    /// table cached from an earlier call.
    fn fetch_rates(&self) -> BoxFuture<'_, Result<RateTable, FxError>>;
}

impl RatesService for RatesClient {
    fn fetch_rates(&self) -> BoxFuture<'_, Result<RateTable, FxError>> {
        Box::pin(crate::rates::fetch_rates(self))
    }
}

impl<S: RatesService + ?Sized> RatesService for &S {
    fn fetch_rates(&self) -> BoxFuture<'_, Result<RateTable, FxError>> {
        (**self).fetch_rates()
    }
}

impl<S: RatesService + ?Sized> RatesService for std::sync::Arc<S> {
    fn fetch_rates(&self) -> BoxFuture<'_, Result<RateTable, FxError>> {
        (**self).fetch_rates()
    }
}
