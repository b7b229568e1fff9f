//! Locale-aware rendering of converted amounts.
//!
//! Four output shapes are supported:
//! - plain currency (`$110`, `110 €`),
//! - word-suffixed (`110 coins`),
//! - compact with locale words (`2.5 million`),
//! - compact without words, currency symbol re-attached (`$2.5`).

mod compact;
mod currency;
mod locale;
mod number;

pub use locale::Locale;

use rust_decimal::Decimal;

use compact::{CompactDisplay, format_compact, strip_unit_words};
use number::format_decimal;

/// Which side of the number the currency symbol goes on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignPlacement {
    #[default]
    Before,
    After,
}

impl SignPlacement {
    /// `"after"` (any case) places the sign after the number; anything else before it.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("after") {
            Self::After
        } else {
            Self::Before
        }
    }
}

/// Formats amounts for one locale and presentation configuration.
#[derive(Debug, Clone)]
pub struct Formatter {
    locale: Locale,
    placement: SignPlacement,
    separator: bool,
    word: String,
}

impl Formatter {
    pub fn new(
        locale: Locale,
        placement: SignPlacement,
        separator: bool,
        word: impl Into<String>,
    ) -> Self {
        Self {
            locale,
            placement,
            separator,
            word: word.into(),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Integer-rounded number with the currency symbol attached.
    pub fn currency(&self, amount: Decimal, code: &str) -> String {
        let number = format_decimal(amount, 0, self.locale.data());
        self.attach_symbol(&number, code)
    }

    /// Integer-rounded number followed by a space and the configured word.
    pub fn word(&self, amount: Decimal) -> String {
        let number = format_decimal(amount, 0, self.locale.data());
        format!("{number} {}", self.word)
    }

    /// Compact notation with the locale's long unit words, at most one fraction digit.
    pub fn big_number(&self, amount: Decimal) -> String {
        format_compact(amount, 1, CompactDisplay::Long, self.locale.data())
    }

    /// Short compact notation with the unit stripped and the currency symbol attached.
    ///
    /// Millions (`[1e6, 1e9)`) show no fraction digit; every other range shows one.
    pub fn big_number_no_word(&self, amount: Decimal, code: &str) -> String {
        let millions = amount >= Decimal::from(1_000_000_i64)
            && amount < Decimal::from(1_000_000_000_i64);
        let max_frac = if millions { 0 } else { 1 };

        let compact = format_compact(amount, max_frac, CompactDisplay::Short, self.locale.data());
        self.attach_symbol(&strip_unit_words(&compact), code)
    }

    /// The symbol shown for `code` in this locale, or the code itself when none is known.
    pub fn currency_symbol(&self, code: &str) -> String {
        currency::symbol_for(self.locale.language(), code)
    }

    fn attach_symbol(&self, number: &str, code: &str) -> String {
        let symbol = self.currency_symbol(code);
        let separator = if self.separator { " " } else { "" };
        match self.placement {
            SignPlacement::After => format!("{number}{separator}{symbol}"),
            SignPlacement::Before => format!("{symbol}{separator}{number}"),
        }
    }
}
