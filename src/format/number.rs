use rust_decimal::{Decimal, RoundingStrategy};

use crate::format::locale::LocaleData;

const COMPACT_MIN_GROUPING: usize = 2;

/// Digits of a rounded number, split for plural selection and rendering.
pub(crate) struct Digits {
    pub(crate) negative: bool,
    pub(crate) integer: String,
    pub(crate) fraction: String,
}

impl Digits {
    /// Rounds half away from zero to at most `max_frac` digits and drops trailing zeros.
    pub(crate) fn round(value: Decimal, max_frac: u32) -> Self {
        let rounded = value
            .round_dp_with_strategy(max_frac, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let text = rounded.abs().to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        Self {
            negative,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        }
    }

    /// Integer part as a number, saturating for values beyond `u64`.
    pub(crate) fn integer_value(&self) -> u64 {
        self.integer.parse().unwrap_or(u64::MAX)
    }

    pub(crate) fn render(&self, data: &LocaleData) -> String {
        self.render_grouped(data, data.min_grouping)
    }

    /// Compact notation leaves four-digit integer parts ungrouped in every locale.
    pub(crate) fn render_compact(&self, data: &LocaleData) -> String {
        self.render_grouped(data, data.min_grouping.max(COMPACT_MIN_GROUPING))
    }

    fn render_grouped(&self, data: &LocaleData, min_grouping: usize) -> String {
        let mut out = String::with_capacity(self.integer.len() + self.fraction.len() + 4);
        if self.negative {
            out.push('-');
        }
        out.push_str(&group_integer(&self.integer, data.group, min_grouping));
        if !self.fraction.is_empty() {
            out.push_str(data.decimal);
            out.push_str(&self.fraction);
        }
        out
    }
}

/// Locale decimal formatting with no minimum fraction digits.
pub(crate) fn format_decimal(value: Decimal, max_frac: u32, data: &LocaleData) -> String {
    Digits::round(value, max_frac).render(data)
}

fn group_integer(integer: &str, group: &str, min_grouping: usize) -> String {
    let len = integer.len();
    if len < 3 + min_grouping {
        return integer.to_string();
    }

    let mut out = String::with_capacity(len + len / 3 * group.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(group);
        }
        out.push(ch);
    }
    out
}
