use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// Exchange rates relative to a single base currency, as returned by one fetch.
///
/// Codes are stored uppercase; lookups are case-insensitive. The table is never mutated
/// after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
    source: Option<String>,
}

impl RateTable {
    /// Builds a table from `(code, rate)` pairs.
    pub fn new<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, Decimal)>) -> Self {
        let rates = entries
            .into_iter()
            .map(|(code, rate)| (normalize_code(code.as_ref()), rate))
            .collect();
        Self {
            rates,
            source: None,
        }
    }

    /// Records which URL produced this table.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The URL this table was fetched from, if it came off the network.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Looks up the rate for `code`.
    ///
    /// A zero rate is reported as absent: it cannot produce a meaningful display value.
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates
            .get(&normalize_code(code))
            .copied()
            .filter(|rate| !rate.is_zero())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates `(code, rate)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

impl<K: AsRef<str>> FromIterator<(K, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
