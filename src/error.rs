//! Error types for the banditlab library.

use thiserror::Error;

/// Result type alias for bandit operations.
pub type Result<T> = std::result::Result<T, BanditError>;

/// Errors that can occur while building or driving a bandit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    /// No arms are available in the bandit.
    #[error("no arms available")]
    NoArmsAvailable,

    /// Two arms were given the same identifier.
    #[error("arm already exists: {id}")]
    ArmAlreadyExists { id: String },

    /// An arm index does not refer to an arm in the collection.
    #[error("arm index {index} out of range for {len} arms")]
    ArmIndexOutOfRange { index: usize, len: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The simulation configuration could not be parsed.
    #[error("config error: {message}")]
    Config { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BanditError::NoArmsAvailable;
        assert_eq!(err.to_string(), "no arms available");

        let err = BanditError::InvalidParameter {
            message: "epsilon must be between 0 and 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter: epsilon must be between 0 and 1"
        );

        let err = BanditError::ArmIndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "arm index 7 out of range for 4 arms");

        let err = BanditError::ArmAlreadyExists {
            id: "red".to_string(),
        };
        assert_eq!(err.to_string(), "arm already exists: red");
    }
}
