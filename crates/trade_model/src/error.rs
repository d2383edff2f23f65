//! Model error types.

use thiserror::Error;

/// Errors raised while encoding features, fitting or evaluating a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Too few rows to fit and evaluate, or a partition would be empty.
    #[error("Insufficient data ({rows} rows): {reason}")]
    InsufficientData {
        /// Number of rows supplied
        rows: usize,
        /// Which requirement was not met
        reason: String,
    },

    /// Every target value is identical, so R² is undefined.
    #[error("All {rows} target values equal {value}; R² is undefined")]
    ConstantTarget {
        /// The shared target value
        value: f64,
        /// Number of rows supplied
        rows: usize,
    },

    /// The held-out targets have zero variance, so R² is undefined.
    #[error("Held-out partition of {test_size} rows has zero target variance")]
    DegenerateEvaluation {
        /// Number of held-out rows
        test_size: usize,
    },

    /// A label is absent from a persisted category mapping.
    #[error("Unknown {column} label: {label}")]
    UnknownCategory {
        /// Categorical column name
        column: &'static str,
        /// The unmapped label
        label: String,
    },

    /// A pipeline or forest setting is out of range.
    #[error("Invalid model configuration {field}: {reason}")]
    InvalidConfig {
        /// Setting name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Prediction was requested from a forest with no fitted trees.
    #[error("Model has not been fitted")]
    NotFitted,
}

impl ModelError {
    /// Create an insufficient data error
    pub fn insufficient(rows: usize, reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            rows,
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ModelError::UnknownCategory {
            column: "Origin_Country",
            label: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown Origin_Country label: Atlantis");

        let err = ModelError::insufficient(1, "at least 2 rows are required");
        assert!(err.to_string().contains("1 rows"));

        let err = ModelError::invalid_config("n_trees", "must be at least 1");
        assert!(err.to_string().contains("n_trees"));
    }
}
