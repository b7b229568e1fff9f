use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

/// The feeds answer either `{ "rates": { "USD": 1.1, .. }, .. }` or the bare mapping.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RatesEnvelope {
    Nested { rates: BTreeMap<String, Value> },
    Flat(BTreeMap<String, Value>),
}

impl RatesEnvelope {
    /// Numeric entries only; metadata such as `"result": "success"` is dropped.
    pub(crate) fn into_entries(self) -> Vec<(String, Decimal)> {
        let map = match self {
            Self::Nested { rates } => rates,
            Self::Flat(map) => map,
        };
        map.into_iter()
            .filter_map(|(code, value)| decimal_from_value(&value).map(|rate| (code, rate)))
            .collect()
    }
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
