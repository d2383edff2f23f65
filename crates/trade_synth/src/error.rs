//! Synthesis error types.

use thiserror::Error;
use trade_core::types::RecordError;

/// Errors raised while configuring or running the synthesiser.
///
/// With valid parameters generation cannot fail; the `Record` variant exists
/// so that the record constructor's checks are propagated rather than
/// unwrapped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisError {
    /// A synthesis parameter is out of range.
    #[error("Invalid synthesis parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A synthesised row violated a record invariant.
    #[error("Synthesised record rejected: {0}")]
    Record(#[from] RecordError),
}

impl SynthesisError {
    /// Create an invalid parameter error
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
