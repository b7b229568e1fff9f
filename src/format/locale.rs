//! Built-in number-formatting data per language.
//!
//! Covers grouping and decimal separators, compact-notation units (short and long) and
//! the plural rule used to pick long unit words. Unknown languages use English rules.

use std::fmt;

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

/// CLDR plural categories that matter for compact unit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PluralRule {
    /// one: integer 1 with no visible fraction.
    OneIfExactlyOne,
    /// one: integer part 0 or 1 (French, Portuguese).
    OneIfBelowTwo,
    /// one / few / many for integers, other for fractions (Russian, Ukrainian).
    EastSlavic,
    /// one for exactly 1, few / many for other integers, other for fractions.
    Polish,
}

impl PluralRule {
    /// `integer` is the integer part, `has_fraction` whether digits follow the separator.
    pub(crate) fn category(self, integer: u64, has_fraction: bool) -> PluralCategory {
        let n10 = integer % 10;
        let n100 = integer % 100;
        match self {
            Self::OneIfExactlyOne => {
                if integer == 1 && !has_fraction {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::OneIfBelowTwo => {
                if integer <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::EastSlavic => {
                if has_fraction {
                    PluralCategory::Other
                } else if n10 == 1 && n100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                if has_fraction {
                    PluralCategory::Other
                } else if integer == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
        }
    }
}

/// Long unit word per plural category, each with its leading separator.
#[derive(Debug)]
pub(crate) struct LongForms {
    pub(crate) one: &'static str,
    pub(crate) few: &'static str,
    pub(crate) many: &'static str,
    pub(crate) other: &'static str,
}

impl LongForms {
    const fn same(word: &'static str) -> Self {
        Self {
            one: word,
            few: word,
            many: word,
            other: word,
        }
    }

    const fn two(one: &'static str, other: &'static str) -> Self {
        Self {
            one,
            few: other,
            many: other,
            other,
        }
    }

    pub(crate) fn pick(&self, category: PluralCategory) -> &'static str {
        match category {
            PluralCategory::One => self.one,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
            PluralCategory::Other => self.other,
        }
    }
}

/// One compact-notation range: values of at least `10^from` are divided by `10^divisor`
/// and followed by `suffix`.
#[derive(Debug)]
pub(crate) struct CompactStep<S: 'static> {
    pub(crate) from: i32,
    pub(crate) divisor: i32,
    pub(crate) suffix: S,
}

const fn step<S: 'static>(exp: i32, suffix: S) -> CompactStep<S> {
    CompactStep {
        from: exp,
        divisor: exp,
        suffix,
    }
}

#[derive(Debug)]
pub(crate) struct LocaleData {
    pub(crate) language: &'static str,
    pub(crate) group: &'static str,
    pub(crate) decimal: &'static str,
    /// Integer digits required before grouping kicks in beyond the first group.
    pub(crate) min_grouping: usize,
    pub(crate) plural: PluralRule,
    /// Short compact ranges in ascending order; smaller values are shown in full.
    pub(crate) short: &'static [CompactStep<&'static str>],
    /// Long compact ranges in ascending order.
    pub(crate) long: &'static [CompactStep<LongForms>],
}

static EN_SHORT: [CompactStep<&str>; 4] = [step(3, "K"), step(6, "M"), step(9, "B"), step(12, "T")];

static EN_LONG: [CompactStep<LongForms>; 4] = [
    step(3, LongForms::same(" thousand")),
    step(6, LongForms::same(" million")),
    step(9, LongForms::same(" billion")),
    step(12, LongForms::same(" trillion")),
];

static EN: LocaleData = LocaleData {
    language: "en",
    group: ",",
    decimal: ".",
    min_grouping: 1,
    plural: PluralRule::OneIfExactlyOne,
    short: &EN_SHORT,
    long: &EN_LONG,
};

// no abbreviation for thousands
static DE_SHORT: [CompactStep<&str>; 3] = [
    step(6, "\u{a0}Mio."),
    step(9, "\u{a0}Mrd."),
    step(12, "\u{a0}Bio."),
];

static DE_LONG: [CompactStep<LongForms>; 4] = [
    step(3, LongForms::same(" Tausend")),
    step(6, LongForms::two(" Million", " Millionen")),
    step(9, LongForms::two(" Milliarde", " Milliarden")),
    step(12, LongForms::two(" Billion", " Billionen")),
];

static DE: LocaleData = LocaleData {
    language: "de",
    group: ".",
    decimal: ",",
    min_grouping: 1,
    plural: PluralRule::OneIfExactlyOne,
    short: &DE_SHORT,
    long: &DE_LONG,
};

static FR_SHORT: [CompactStep<&str>; 4] = [
    step(3, "\u{a0}k"),
    step(6, "\u{a0}M"),
    step(9, "\u{a0}Md"),
    step(12, "\u{a0}Bn"),
];

static FR_LONG: [CompactStep<LongForms>; 4] = [
    step(3, LongForms::two(" millier", " mille")),
    step(6, LongForms::two(" million", " millions")),
    step(9, LongForms::two(" milliard", " milliards")),
    step(12, LongForms::two(" billion", " billions")),
];

static FR: LocaleData = LocaleData {
    language: "fr",
    group: NNBSP,
    decimal: ",",
    min_grouping: 1,
    plural: PluralRule::OneIfBelowTwo,
    short: &FR_SHORT,
    long: &FR_LONG,
};

// 10^9 is counted in millions ("2500 M") until 10^10
static ES_SHORT: [CompactStep<&str>; 4] = [
    step(3, "\u{a0}mil"),
    step(6, "\u{a0}M"),
    CompactStep {
        from: 10,
        divisor: 9,
        suffix: "\u{a0}mil\u{a0}M",
    },
    step(12, "\u{a0}B"),
];

static ES_LONG: [CompactStep<LongForms>; 4] = [
    step(3, LongForms::same(" mil")),
    step(6, LongForms::two(" millón", " millones")),
    step(9, LongForms::same(" mil millones")),
    step(12, LongForms::two(" billón", " billones")),
];

static ES: LocaleData = LocaleData {
    language: "es",
    group: ".",
    decimal: ",",
    min_grouping: 2,
    plural: PluralRule::OneIfExactlyOne,
    short: &ES_SHORT,
    long: &ES_LONG,
};

static IT_SHORT: [CompactStep<&str>; 4] = [
    step(3, "K"),
    step(6, "\u{a0}Mln"),
    step(9, "\u{a0}Mrd"),
    step(12, "\u{a0}Bln"),
];

static IT_LONG: [CompactStep<LongForms>; 4] = [
    step(3, LongForms::two(" mille", " mila")),
    step(6, LongForms::two(" milione", " milioni")),
    step(9, LongForms::two(" miliardo", " miliardi")),
    step(12, LongForms::two(" mille miliardi", " mila miliardi")),
];

static IT: LocaleData = LocaleData {
    language: "it",
    group: ".",
    decimal: ",",
    min_grouping: 1,
    plural: PluralRule::OneIfExactlyOne,
    short: &IT_SHORT,
    long: &IT_LONG,
};

static PT_SHORT: [CompactStep<&str>; 4] = [
    step(3, "\u{a0}mil"),
    step(6, "\u{a0}mi"),
    step(9, "\u{a0}bi"),
    step(12, "\u{a0}tri"),
];

static PT_LONG: [CompactStep<LongForms>; 4] = [
    step(3, LongForms::same(" mil")),
    step(6, LongForms::two(" milhão", " milhões")),
    step(9, LongForms::two(" bilhão", " bilhões")),
    step(12, LongForms::two(" trilhão", " trilhões")),
];

static PT: LocaleData = LocaleData {
    language: "pt",
    group: ".",
    decimal: ",",
    min_grouping: 1,
    plural: PluralRule::OneIfBelowTwo,
    short: &PT_SHORT,
    long: &PT_LONG,
};

static NL_SHORT: [CompactStep<&str>; 4] = [
    step(3, "K"),
    step(6, "\u{a0}mln."),
    step(9, "\u{a0}mld."),
    step(12, "\u{a0}bln."),
];

static NL_LONG: [CompactStep<LongForms>; 4] = [
    step(3, LongForms::same(" duizend")),
    step(6, LongForms::same(" miljoen")),
    step(9, LongForms::same(" miljard")),
    step(12, LongForms::same(" biljoen")),
];

static NL: LocaleData = LocaleData {
    language: "nl",
    group: ".",
    decimal: ",",
    min_grouping: 1,
    plural: PluralRule::OneIfExactlyOne,
    short: &NL_SHORT,
    long: &NL_LONG,
};

static PL_SHORT: [CompactStep<&str>; 4] = [
    step(3, "\u{a0}tys."),
    step(6, "\u{a0}mln"),
    step(9, "\u{a0}mld"),
    step(12, "\u{a0}bln"),
];

static PL_LONG: [CompactStep<LongForms>; 4] = [
    step(
        3,
        LongForms {
            one: " tysiąc",
            few: " tysiące",
            many: " tysięcy",
            other: " tysiąca",
        },
    ),
    step(
        6,
        LongForms {
            one: " milion",
            few: " miliony",
            many: " milionów",
            other: " miliona",
        },
    ),
    step(
        9,
        LongForms {
            one: " miliard",
            few: " miliardy",
            many: " miliardów",
            other: " miliarda",
        },
    ),
    step(
        12,
        LongForms {
            one: " bilion",
            few: " biliony",
            many: " bilionów",
            other: " biliona",
        },
    ),
];

static PL: LocaleData = LocaleData {
    language: "pl",
    group: NBSP,
    decimal: ",",
    min_grouping: 2,
    plural: PluralRule::Polish,
    short: &PL_SHORT,
    long: &PL_LONG,
};

static RU_SHORT: [CompactStep<&str>; 4] = [
    step(3, "\u{a0}тыс."),
    step(6, "\u{a0}млн"),
    step(9, "\u{a0}млрд"),
    step(12, "\u{a0}трлн"),
];

static RU_LONG: [CompactStep<LongForms>; 4] = [
    step(
        3,
        LongForms {
            one: " тысяча",
            few: " тысячи",
            many: " тысяч",
            other: " тысячи",
        },
    ),
    step(
        6,
        LongForms {
            one: " миллион",
            few: " миллиона",
            many: " миллионов",
            other: " миллиона",
        },
    ),
    step(
        9,
        LongForms {
            one: " миллиард",
            few: " миллиарда",
            many: " миллиардов",
            other: " миллиарда",
        },
    ),
    step(
        12,
        LongForms {
            one: " триллион",
            few: " триллиона",
            many: " триллионов",
            other: " триллиона",
        },
    ),
];

static RU: LocaleData = LocaleData {
    language: "ru",
    group: NBSP,
    decimal: ",",
    min_grouping: 1,
    plural: PluralRule::EastSlavic,
    short: &RU_SHORT,
    long: &RU_LONG,
};

static UK_SHORT: [CompactStep<&str>; 4] = [
    step(3, "\u{a0}тис."),
    step(6, "\u{a0}млн"),
    step(9, "\u{a0}млрд"),
    step(12, "\u{a0}трлн"),
];

static UK_LONG: [CompactStep<LongForms>; 4] = [
    step(
        3,
        LongForms {
            one: " тисяча",
            few: " тисячі",
            many: " тисяч",
            other: " тисячі",
        },
    ),
    step(
        6,
        LongForms {
            one: " мільйон",
            few: " мільйони",
            many: " мільйонів",
            other: " мільйона",
        },
    ),
    step(
        9,
        LongForms {
            one: " мільярд",
            few: " мільярди",
            many: " мільярдів",
            other: " мільярда",
        },
    ),
    step(
        12,
        LongForms {
            one: " трильйон",
            few: " трильйони",
            many: " трильйонів",
            other: " трильйона",
        },
    ),
];

static UK: LocaleData = LocaleData {
    language: "uk",
    group: NBSP,
    decimal: ",",
    min_grouping: 1,
    plural: PluralRule::EastSlavic,
    short: &UK_SHORT,
    long: &UK_LONG,
};

static ALL: [&LocaleData; 10] = [&EN, &DE, &FR, &ES, &IT, &PT, &NL, &PL, &RU, &UK];

/// A number-format locale, parsed from an identifier such as `en-US` or `de_DE`.
///
/// Only the language subtag selects formatting rules; the full identifier is kept for
/// display. Languages without built-in data format like English.
#[derive(Clone)]
pub struct Locale {
    tag: String,
    data: &'static LocaleData,
}

impl Locale {
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let data = ALL
            .iter()
            .copied()
            .find(|d| d.language == language)
            .unwrap_or(&EN);

        Self {
            tag: tag.to_string(),
            data,
        }
    }

    /// The identifier this locale was parsed from.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The language whose rules are applied (`"en"` for unknown languages).
    pub fn language(&self) -> &'static str {
        self.data.language
    }

    /// Whether the identifier's language has built-in data.
    pub fn is_supported(&self) -> bool {
        self.tag
            .split(['-', '_'])
            .next()
            .is_some_and(|lang| lang.eq_ignore_ascii_case(self.data.language))
    }

    pub(crate) fn data(&self) -> &'static LocaleData {
        self.data
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::parse("en-US")
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale")
            .field("tag", &self.tag)
            .field("language", &self.data.language)
            .finish()
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && std::ptr::eq(self.data, other.data)
    }
}

impl Eq for Locale {}

impl std::str::FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
