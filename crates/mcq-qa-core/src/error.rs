//! Error types for mcq-qa-core

use thiserror::Error;

/// Result type alias for mcq-qa-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at configuration-load time or at the I/O boundary
///
/// Validating a batch never produces an `Error`; malformed questions are
/// reported as violations. These variants are reserved for programmer and
/// environment faults that must fail loudly before any batch is judged.
#[derive(Debug, Error)]
pub enum Error {
    /// Protocol not found in the registry
    #[error("Protocol not found: {0}")]
    ProtocolNotFound(String),

    /// Protocol definition is unusable
    #[error("Invalid protocol '{id}': {reason}")]
    InvalidProtocol {
        /// Protocol identifier
        id: String,
        /// What made the definition unusable
        reason: String,
    },

    /// Difficulty tier name is not one of easy/balanced/hard
    #[error("Unknown difficulty tier: {0} (expected easy, balanced, or hard)")]
    UnknownTier(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ProtocolNotFound("neet-botany".to_string());
        assert_eq!(err.to_string(), "Protocol not found: neet-botany");
    }

    #[test]
    fn test_invalid_protocol_display() {
        let err = Error::InvalidProtocol {
            id: "ssc-gd".to_string(),
            reason: "no validators configured".to_string(),
        };
        assert!(err.to_string().contains("ssc-gd"));
        assert!(err.to_string().contains("no validators"));
    }

    #[test]
    fn test_unknown_tier_display() {
        let err = Error::UnknownTier("extreme".to_string());
        assert!(err.to_string().contains("extreme"));
        assert!(err.to_string().contains("easy, balanced, or hard"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::SerializationError(_)));
    }

    #[test]
    fn test_error_from_serde_yaml() {
        let yaml_err: serde_yaml::Error = serde_yaml::from_str::<i32>("not: [yaml").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(matches!(err, Error::YamlError(_)));
    }
}
