//! Currency symbol lookup.

use std::{collections::HashMap, sync::LazyLock};

/// Code → symbol pairs shown regardless of locale.
///
/// Codes missing here render as the uppercase code itself (`PLN`, `CHF`).
const SYMBOLS_RAW: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "CN¥"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("ILS", "₪"),
    ("VND", "₫"),
    ("PHP", "₱"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("NZD", "NZ$"),
    ("HKD", "HK$"),
    ("TWD", "NT$"),
    ("MXN", "MX$"),
    ("BRL", "R$"),
    ("XAF", "FCFA"),
    ("XOF", "F\u{202f}CFA"),
    ("XPF", "CFPF"),
    ("XCD", "EC$"),
];

/// `(language, code)` → symbol where a language departs from the table above, either
/// with a native sign or by showing the bare code.
const LOCAL_SYMBOLS_RAW: &[(&str, &str, &str)] = &[
    ("ru", "RUB", "₽"),
    ("uk", "UAH", "₴"),
    ("pl", "PLN", "zł"),
    ("de", "CHF", "CHF"),
    ("en", "CAD", "CA$"),
    ("fr", "CAD", "$CA"),
    ("fr", "USD", "$US"),
    ("es", "USD", "US$"),
    ("pt", "USD", "US$"),
    ("nl", "USD", "US$"),
    ("pt", "BRL", "R$"),
    ("fr", "GBP", "£GB"),
    ("fr", "JPY", "JPY"),
    ("es", "CAD", "CAD"),
    ("es", "JPY", "JPY"),
    ("it", "USD", "USD"),
    ("pl", "USD", "USD"),
    ("pl", "GBP", "GBP"),
    ("uk", "USD", "USD"),
    ("uk", "GBP", "GBP"),
    ("uk", "BRL", "BRL"),
];

static SYMBOLS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SYMBOLS_RAW.iter().copied().collect());

/// Symbol for `code` as shown to readers of `language`.
pub(crate) fn symbol_for(language: &str, code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    if code.is_empty() {
        return String::new();
    }

    LOCAL_SYMBOLS_RAW
        .iter()
        .find(|(lang, local, _)| *lang == language && *local == code)
        .map(|(_, _, symbol)| *symbol)
        .or_else(|| SYMBOLS.get(code.as_str()).copied())
        .map_or(code.clone(), str::to_string)
}
