//! fxdeposit-rs: converts a fixed deposit amount into a target currency and renders it.
//!
//! A [`RateConverter`] fetches a rate table (primary feed, then one fallback), picks the
//! configured currency, and writes one formatted string per display target. Targets are
//! anything implementing [`RenderTarget`]; [`Element`] is a ready-made in-memory one.

pub mod config;
pub mod converter;
pub mod core;
pub mod format;
pub mod policy;
pub mod rates;
pub mod render;
pub mod rounding;

pub use config::{ConverterConfig, DEFAULT_UNAVAILABLE_MESSAGE, RawConfig};
pub use converter::{RateConverter, RenderOutcome};
pub use crate::core::{FxError, RatesClient, RatesClientBuilder, RatesService, SourceFailure};
pub use format::{Formatter, Locale, SignPlacement};
pub use policy::ConversionPolicy;
pub use rates::{RateTable, RatesBuilder, fetch_rates};
pub use render::{Element, Marker, RenderTarget, Selector, discover};
