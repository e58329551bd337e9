use thiserror::Error;

/// Unified error type for node-gate operations
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Node.js {detected} is below the required major version {required}")]
    UnsupportedVersion { detected: String, required: u64 },

    #[error("{0}")]
    Detection(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in node-gate
pub type Result<T> = std::result::Result<T, GateError>;

impl GateError {
    /// Create a detection error with context
    pub fn detection(msg: impl Into<String>) -> Self {
        GateError::Detection(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GateError::Config(msg.into())
    }

    /// Whether the error means the gate refused the runtime, as opposed to a
    /// fault while looking at it.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, GateError::UnsupportedVersion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GateError::config("bad min_major");
        assert_eq!(err.to_string(), "Configuration error: bad min_major");
    }

    #[test]
    fn test_detection_error_is_bare_message() {
        let err = GateError::detection("node exited with status 127");
        assert_eq!(err.to_string(), "node exited with status 127");
        assert!(!err.is_unsupported());
    }

    #[test]
    fn test_unsupported_display() {
        let err = GateError::UnsupportedVersion {
            detected: "v16.20.1".to_string(),
            required: 18,
        };
        let msg = err.to_string();
        assert!(msg.contains("v16.20.1"));
        assert!(msg.contains("18"));
        assert!(err.is_unsupported());
    }
}
