//! Error types for parhist
//!
//! Provides a unified error type for all parhist crates.

use thiserror::Error;

/// Core error type for histogram and collection operations
#[derive(Error, Debug)]
pub enum Error {
    /// The input collection type has no registered histogram implementation
    #[error("Not supported data type: '{type_name}'")]
    UnsupportedType { type_name: String },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two count arrays could not be merged
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a collection type with no histogram implementation
    pub fn unsupported<D: ?Sized>() -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<D>().to_string(),
        }
    }

    /// Create an error for a bad bin specification
    pub fn invalid_bins(lower: f64, upper: f64, bins: usize, reason: &str) -> Self {
        Self::InvalidParameter(format!(
            "bins={bins} over [{lower}, {upper}]: {reason}"
        ))
    }

    /// Create an error for count arrays of different shapes
    pub fn shape_mismatch(expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("bins must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: bins must be positive");

        let err = Error::Execution("thread pool exhausted".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool exhausted");

        let err = Error::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Config error: missing field");
    }

    #[test]
    fn test_unsupported_names_the_type() {
        let err = Error::unsupported::<Vec<f64>>();
        let msg = err.to_string();
        assert!(msg.starts_with("Not supported data type: '"));
        assert!(msg.contains("Vec<f64>"), "message was {msg}");

        match err {
            Error::UnsupportedType { type_name } => assert!(type_name.contains("Vec")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_bins(1.0, 0.0, 10, "lower must be below upper");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: bins=10 over [1, 0]: lower must be below upper"
        );

        let err = Error::shape_mismatch(&[12], &[7]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [12], got [7]");

        let err = Error::shape_mismatch(&[4, 5], &[5, 4]);
        match err {
            Error::ShapeMismatch { expected, actual } => {
                assert_eq!(expected, vec![4, 5]);
                assert_eq!(actual, vec![5, 4]);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Config error: "));
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }
}
