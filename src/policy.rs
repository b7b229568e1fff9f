//! Selection and application of the per-target conversion policy.

use rust_decimal::Decimal;

use crate::format::Formatter;
use crate::render::{Marker, RenderTarget};
use crate::rounding::{parse_multiplier, round_to_significant_digits, round_up_two_significant};

/// Largest converted value that is rounded and formatted; leaves headroom below
/// `Decimal::MAX` for the rounding steps.
fn max_display_value() -> Decimal {
    Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000_000_000, 0)
}

/// How one target turns the base amount into text.
///
/// Variants carrying a multiplier hold the parsed attribute for that target; `None` when
/// the attribute is a number too large to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionPolicy {
    /// Base amount times rate, plain currency. Multipliers are ignored.
    Deposit,
    /// Rounded to two significant digits, plain currency.
    RoundSignificant(Option<Decimal>),
    /// Integer amount followed by the configured word.
    Word(Option<Decimal>),
    /// Compact notation with locale unit words.
    BigNumber(Option<Decimal>),
    /// Compact notation without unit words, currency symbol attached.
    BigNumberNoWord(Option<Decimal>),
    /// Plain currency after multiplying.
    Multiply(Option<Decimal>),
    /// Plain currency, multiplier 1.
    Default,
}

impl ConversionPolicy {
    /// Picks the first policy whose marker is present, in precedence order.
    pub fn select<T: RenderTarget + ?Sized>(target: &T) -> Self {
        if target.has_marker(Marker::Deposit) {
            return Self::Deposit;
        }

        let multiplier = |marker: Marker| {
            target
                .marker_value(marker)
                .map(|v| parse_multiplier(Some(v)))
        };

        if let Some(m) = multiplier(Marker::MultiplyRound) {
            Self::RoundSignificant(m)
        } else if let Some(m) = multiplier(Marker::MultiplyWord) {
            Self::Word(m)
        } else if let Some(m) = multiplier(Marker::MultiplyBigNumber) {
            Self::BigNumber(m)
        } else if let Some(m) = multiplier(Marker::MultiplyBigNumberNoWord) {
            Self::BigNumberNoWord(m)
        } else if let Some(m) = multiplier(Marker::Multiply) {
            Self::Multiply(m)
        } else {
            Self::Default
        }
    }

    pub fn multiplier(&self) -> Option<Decimal> {
        match *self {
            Self::Deposit | Self::Default => Some(Decimal::ONE),
            Self::RoundSignificant(m)
            | Self::Word(m)
            | Self::BigNumber(m)
            | Self::BigNumberNoWord(m)
            | Self::Multiply(m) => m,
        }
    }

    /// Converts `base` at `rate` into display text for currency `code`.
    ///
    /// Returns `None` when the multiplier or the product is too large to represent.
    pub fn apply(
        &self,
        base: Decimal,
        rate: Decimal,
        round_up: bool,
        code: &str,
        formatter: &Formatter,
    ) -> Option<String> {
        let mut value = base.checked_mul(self.multiplier()?)?.checked_mul(rate)?;
        if value.abs() > max_display_value() {
            return None;
        }

        if round_up {
            value = round_up_two_significant(value);
        }

        let text = match self {
            Self::Deposit | Self::Multiply(_) | Self::Default => formatter.currency(value, code),
            Self::RoundSignificant(_) => {
                formatter.currency(round_to_significant_digits(value), code)
            }
            Self::Word(_) => formatter.word(value),
            Self::BigNumber(_) => formatter.big_number(value),
            Self::BigNumberNoWord(_) => formatter.big_number_no_word(value, code),
        };
        Some(text)
    }
}
