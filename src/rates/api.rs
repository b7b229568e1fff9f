use std::future::Future;

use url::Url;

use crate::core::{FxError, RatesClient, SourceFailure, net};
use crate::rates::{model::RateTable, wire::RatesEnvelope};

pub(super) async fn fetch_rates(
    client: &RatesClient,
    base_currency: &str,
) -> Result<RateTable, FxError> {
    let urls = client.source_urls(base_currency)?;
    first_success(urls, |url| fetch_one(client, url)).await
}

/// Tries each URL once, in order, and returns the first successful result.
///
/// Every failed attempt is logged and collected into `FxError::AllSourcesFailed`.
pub(crate) async fn first_success<T, F, Fut>(urls: Vec<Url>, mut attempt: F) -> Result<T, FxError>
where
    F: FnMut(Url) -> Fut,
    Fut: Future<Output = Result<T, FxError>>,
{
    let mut attempts = Vec::with_capacity(urls.len());

    for url in urls {
        let shown = url.to_string();
        match attempt(url).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(url = %shown, error = %e, "rate source unavailable");
                attempts.push(SourceFailure {
                    url: shown,
                    reason: e.to_string(),
                });
            }
        }
    }

    Err(FxError::AllSourcesFailed { attempts })
}

async fn fetch_one(client: &RatesClient, url: Url) -> Result<RateTable, FxError> {
    let resp = client.http().get(url.clone()).send().await?;
    let body = net::get_text(resp).await?;
    let envelope: RatesEnvelope = serde_json::from_str(&body)?;

    let table = RateTable::new(envelope.into_entries()).with_source(url.as_str());

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %url, rates = table.len(), "fetched rate table");

    Ok(table)
}
