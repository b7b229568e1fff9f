use rust_decimal::{Decimal, RoundingStrategy};

use crate::format::locale::{CompactStep, LocaleData};
use crate::format::number::Digits;
use crate::rounding::{magnitude, pow10};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompactDisplay {
    Short,
    Long,
}

/// Compact notation: the value is divided by the unit of the largest range it falls in
/// and suffixed with the unit's word or abbreviation.
pub(crate) fn format_compact(
    value: Decimal,
    max_frac: u32,
    display: CompactDisplay,
    data: &LocaleData,
) -> String {
    match display {
        CompactDisplay::Short => compact(value, max_frac, data, data.short, |_, suffix| *suffix),
        CompactDisplay::Long => compact(value, max_frac, data, data.long, |digits, forms| {
            let category = data
                .plural
                .category(digits.integer_value(), !digits.fraction.is_empty());
            forms.pick(category)
        }),
    }
}

fn compact<S: 'static>(
    value: Decimal,
    max_frac: u32,
    data: &LocaleData,
    steps: &[CompactStep<S>],
    suffix: impl Fn(&Digits, &S) -> &'static str,
) -> String {
    let exp = magnitude(value);
    let mut index = steps.iter().rposition(|step| exp >= step.from);

    loop {
        let divisor = index.map_or(0, |i| steps[i].divisor);
        let scaled = value / pow10(divisor);

        // 999_950 rounds to "1000K"; show it as "1M" instead
        let next = index.map_or(0, |i| i + 1);
        if let Some(step) = steps.get(next) {
            let rounded = scaled
                .round_dp_with_strategy(max_frac, RoundingStrategy::MidpointAwayFromZero)
                .abs();
            if rounded * pow10(divisor) >= pow10(step.from) {
                index = Some(next);
                continue;
            }
        }

        let digits = Digits::round(scaled, max_frac);
        let mut out = digits.render_compact(data);
        if let Some(i) = index {
            out.push_str(suffix(&digits, &steps[i].suffix));
        }
        return out;
    }
}

/// Strips unit words from a compact string, leaving only the numeral.
pub(crate) fn strip_unit_words(compact: &str) -> String {
    let letters_removed: String = compact.chars().filter(|c| !c.is_alphabetic()).collect();
    letters_removed
        .strip_suffix('.')
        .unwrap_or(&letters_removed)
        .trim()
        .to_string()
}
