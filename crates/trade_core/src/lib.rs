//! # trade_core: Foundation Types for Trade Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! trade_core is the bottom layer of the tradescope workspace, providing:
//! - Typed trade records and the ordered dataset container (`types`)
//! - Calendar helpers: month-end resolution and ISO 8601 parsing (`types::time`)
//! - Error types: `RecordError`, `DateError` (`types::error`)
//! - A seeded, owned random number generator (`rng`)
//! - The fixed country and product catalogue used by synthesis (`catalogue`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other trade_* crates, with minimal external dependencies:
//! - chrono: Calendar dates
//! - rand / rand_distr: Seeded pseudo-random generation
//! - serde: Serialisation of records
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use trade_core::types::{TradeDataset, TradeRecord};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
//! let record = TradeRecord::new(date, "USA", "China", "Electronics", 100.0, 10.0).unwrap();
//! assert_eq!(record.year(), 2023);
//! assert_eq!(record.month(), 1);
//!
//! let dataset = TradeDataset::new(vec![record]);
//! assert_eq!(dataset.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod catalogue;
pub mod rng;
pub mod types;
