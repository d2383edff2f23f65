//! # Random Number Generation Infrastructure
//!
//! Seeded random number generation shared by record synthesis, the
//! train/test split and random forest bootstrapping.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every generator is built from an explicit `u64` seed
//! - **Ownership**: Each operation constructs and owns its generator; nothing
//!   reads or reseeds process-wide state, so repeated or interleaved calls in
//!   one process cannot disturb each other
//!
//! ## Usage Example
//!
//! ```rust
//! use trade_core::rng::SeededRng;
//!
//! let mut rng = SeededRng::from_seed(42);
//! let day = rng.gen_index_inclusive(1460);
//! assert!(day <= 1460);
//!
//! let noise = rng.gen_normal(0.0, 500.0);
//! assert!(noise.is_finite());
//! ```

mod prng;

pub use prng::SeededRng;
