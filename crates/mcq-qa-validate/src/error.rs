//! Error types for mcq-qa-validate

use thiserror::Error;

/// Result type alias for mcq-qa-validate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Faults outside the validation contract
///
/// Judging a batch never fails; these cover configuration load and the
/// serialization boundary only.
#[derive(Debug, Error)]
pub enum Error {
    /// Core configuration error (registry load, protocol build)
    #[error(transparent)]
    Core(#[from] mcq_qa_core::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Worker pool could not be constructed
    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_core() {
        let core_err = mcq_qa_core::Error::ProtocolNotFound("x".to_string());
        let err: Error = core_err.into();
        assert_eq!(err.to_string(), "Protocol not found: x");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_worker_pool_display() {
        let err = Error::WorkerPool("too many threads".to_string());
        assert!(err.to_string().contains("too many threads"));
    }
}
