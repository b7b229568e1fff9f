//! Page-level configuration supplied by the host.
//!
//! [`RawConfig`] mirrors what a host page injects and may be incomplete; [`RawConfig::validate`]
//! turns it into a [`ConverterConfig`] only when every required value is present.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::FxError;
use crate::format::{Formatter, Locale, SignPlacement};

/// Message written into every target when no rate source answers.
pub const DEFAULT_UNAVAILABLE_MESSAGE: &str = "Course not available";

/// Configuration as injected by the host; every field is optional until validated.
///
/// Deserializes from either the legacy page-global names (`CURRENCY_DEFAULT`,
/// `FIXED_AMOUNT_EUR`, ...) or their snake_case equivalents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default, alias = "CURRENCY_DEFAULT")]
    pub currency: Option<String>,
    #[serde(default, alias = "FIXED_AMOUNT_EUR")]
    pub fixed_amount: Option<Decimal>,
    #[serde(default, alias = "CURRENCY_SIGN_LOCATION")]
    pub sign_location: Option<String>,
    #[serde(default, alias = "CURRENCY_FORMAT")]
    pub format: Option<String>,
    #[serde(default, alias = "VALUE_SEPARATOR")]
    pub value_separator: Option<bool>,
    #[serde(default, alias = "CURRENCY_WORD")]
    pub word: Option<String>,
    #[serde(default)]
    pub unavailable_message: Option<String>,
}

impl RawConfig {
    /// Checks that every required value is present.
    ///
    /// # Errors
    ///
    /// Returns `FxError::MissingConfig` naming the first absent value, in declaration order.
    pub fn validate(self) -> Result<ConverterConfig, FxError> {
        let currency = self.currency.ok_or(FxError::MissingConfig("currency"))?;
        let fixed_amount = self
            .fixed_amount
            .ok_or(FxError::MissingConfig("fixed_amount"))?;
        let sign_location = self
            .sign_location
            .ok_or(FxError::MissingConfig("sign_location"))?;
        let format = self.format.ok_or(FxError::MissingConfig("format"))?;
        let value_separator = self
            .value_separator
            .ok_or(FxError::MissingConfig("value_separator"))?;
        let word = self.word.ok_or(FxError::MissingConfig("word"))?;

        Ok(ConverterConfig {
            currency,
            fixed_amount,
            sign_placement: SignPlacement::parse(&sign_location),
            locale: Locale::parse(&format),
            value_separator,
            word,
            unavailable_message: self
                .unavailable_message
                .unwrap_or_else(|| DEFAULT_UNAVAILABLE_MESSAGE.to_string()),
        })
    }
}

/// Validated, read-only converter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Target currency code; matched case-insensitively against the rate table.
    pub currency: String,
    /// Amount in the base currency before any multiplier.
    pub fixed_amount: Decimal,
    pub sign_placement: SignPlacement,
    pub locale: Locale,
    /// Whether a space separates the currency symbol from the number.
    pub value_separator: bool,
    /// Suffix for word-suffixed output.
    pub word: String,
    pub unavailable_message: String,
}

impl ConverterConfig {
    /// A formatter carrying this configuration's locale and sign settings.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.locale.clone(),
            self.sign_placement,
            self.value_separator,
            self.word.clone(),
        )
    }
}
