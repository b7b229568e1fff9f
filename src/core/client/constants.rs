//! Centralized constants for default endpoints and UA.

/// Identifies this crate to the rate providers.
pub(crate) const USER_AGENT: &str = concat!("fxdeposit-rs/", env!("CARGO_PKG_VERSION"));

/// Primary rate feed (base currency code is appended).
pub(crate) const DEFAULT_PRIMARY_SOURCE: &str = "https://open.er-api.com/v6/latest/";

/// Backup rate feed, same response contract (base currency code is appended).
pub(crate) const DEFAULT_FALLBACK_SOURCE: &str = "https://api.exchangerate-api.com/v4/latest/";

/// Currency the fixed amount and the fetched rates are expressed in.
pub(crate) const DEFAULT_BASE_CURRENCY: &str = "EUR";
