//! Core components of the `fxdeposit-rs` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`RatesClient`] and its builder.
//! - The primary [`FxError`] type.
//! - The [`RatesService`] seam used by the converter.
//! - Internal networking helpers.

/// The rates client (`RatesClient`), builder, and default endpoints.
pub mod client;
/// The primary error type (`FxError`) for the crate.
pub mod error;
/// Service traits for abstracting rate acquisition.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::RatesClient`
pub use client::{RatesClient, RatesClientBuilder};
pub use error::{FxError, SourceFailure};
pub use services::RatesService;
