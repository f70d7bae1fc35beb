//! Error types for propkit
//!
//! Every failure is raised synchronously at the point of violation, before
//! any field is written. Nothing is retried or recovered internally; errors
//! propagate straight to the caller.

use thiserror::Error;

/// General propkit error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Malformed or out-of-domain input at the API boundary
    /// (non-positive bound, negative measurement, non-finite number).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value violates a fixed ceiling/floor.
    #[error("{quantity} out of range: {value} is not within [0, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        max: f64,
    },

    /// Adding an item would push a running total past its cap.
    #[error("adding {requested} {axis} to the current {used} would exceed the limit of {limit}")]
    CapacityExceeded {
        axis: &'static str,
        requested: f64,
        used: f64,
        limit: f64,
    },

    /// Flying further would push the traveled distance past the maximum range.
    #[error("flying {requested} after {traveled} would exceed the maximum range of {max_range}")]
    RangeExceeded {
        requested: f64,
        traveled: f64,
        max_range: f64,
    },

    /// An item with this name is already tracked.
    #[error("item '{name}' is already tracked")]
    DuplicateItem { name: String },

    /// No item with this name is tracked.
    #[error("item '{name}' not found")]
    NotFound { name: String },

    /// A removal would drive a running total negative. Only reachable with
    /// aggregate (unnamed) tracking; the named-item container keeps totals
    /// equal to the sum of its entries, so it never raises this.
    #[error("cannot remove {requested} {axis}: only {available} tracked")]
    Underflow {
        axis: &'static str,
        requested: f64,
        available: f64,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ModelError::CapacityExceeded {
            axis: "volume",
            requested: 5.0,
            used: 38.0,
            limit: 40.0,
        };
        assert_eq!(
            err.to_string(),
            "adding 5 volume to the current 38 would exceed the limit of 40"
        );

        let err = ModelError::DuplicateItem {
            name: "Книга".to_string(),
        };
        assert_eq!(err.to_string(), "item 'Книга' is already tracked");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ModelError = io.into();
        assert!(matches!(err, ModelError::Io(_)));
    }
}
