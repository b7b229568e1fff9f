/// Attribute markers that opt an element into conversion and select its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `data-js-deposit`: the bare converted amount.
    Deposit,
    /// `data-js-deposit-multiply-round`: multiplied, rounded to two significant digits.
    MultiplyRound,
    /// `data-js-deposit-multiply-word`: multiplied, followed by the configured word.
    MultiplyWord,
    /// `data-js-deposit-multiply-bignumber`: multiplied, compact with unit words.
    MultiplyBigNumber,
    /// `data-js-deposit-multiply-bignumber-noword`: multiplied, compact with the symbol.
    MultiplyBigNumberNoWord,
    /// `data-js-deposit-multiply`: multiplied, plain currency.
    Multiply,
    /// `data-js-deposit-round-up`: ceil to two significant digits before formatting.
    RoundUp,
}

impl Marker {
    /// Every marker, in policy precedence order with the round-up flag last.
    pub const ALL: [Marker; 7] = [
        Marker::Deposit,
        Marker::MultiplyRound,
        Marker::MultiplyWord,
        Marker::MultiplyBigNumber,
        Marker::MultiplyBigNumberNoWord,
        Marker::Multiply,
        Marker::RoundUp,
    ];

    pub const fn attribute(self) -> &'static str {
        match self {
            Marker::Deposit => "data-js-deposit",
            Marker::MultiplyRound => "data-js-deposit-multiply-round",
            Marker::MultiplyWord => "data-js-deposit-multiply-word",
            Marker::MultiplyBigNumber => "data-js-deposit-multiply-bignumber",
            Marker::MultiplyBigNumberNoWord => "data-js-deposit-multiply-bignumber-noword",
            Marker::Multiply => "data-js-deposit-multiply",
            Marker::RoundUp => "data-js-deposit-round-up",
        }
    }

    pub fn from_attribute(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.attribute() == name)
    }
}
