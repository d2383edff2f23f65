//! # trade_synth: Synthetic Trade Record Generation
//!
//! Generates a deterministic synthetic dataset of bilateral trade
//! transactions from a fixed seed.
//!
//! Each record's USD volume is an additive decomposition:
//!
//! ```text
//! volume = base + year_trend(year) + seasonal_bump(month) + product_bias(product) + noise
//! ```
//!
//! - **year_trend**: linear growth per year elapsed since the epoch year
//! - **seasonal_bump**: fixed uplift for months in the final quarter
//! - **product_bias**: fixed per-category offset from the catalogue
//! - **noise**: zero-mean Gaussian
//!
//! The volume is clamped at zero, a per-record price per kilogram converts it
//! to a weight, and both are rounded to cents / hundredths of a kilogram.
//!
//! ## Usage
//!
//! ```rust
//! use trade_synth::generate;
//!
//! let first = generate(100, 42).unwrap();
//! let second = generate(100, 42).unwrap();
//! assert_eq!(first, second);
//! assert!(first.is_date_ordered());
//! ```
//!
//! No I/O happens here; persisting the dataset is the caller's concern.

#![deny(missing_docs)]

mod error;
mod params;
mod synthesizer;

pub use error::SynthesisError;
pub use params::SynthesisParams;
pub use synthesizer::{generate, RecordSynthesizer, DEFAULT_ROW_COUNT, DEFAULT_SEED};
