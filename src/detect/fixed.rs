use crate::detect::VersionSource;
use crate::error::{GateError, Result};

/// Version source with a fixed answer, for testing the gate without a Node.js
/// installation.
#[derive(Debug, Clone)]
pub struct FixedSource {
    answer: std::result::Result<String, String>,
}

impl FixedSource {
    /// A source that always reports `version`.
    pub fn new(version: impl Into<String>) -> Self {
        FixedSource {
            answer: Ok(version.into()),
        }
    }

    /// A source that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        FixedSource {
            answer: Err(message.into()),
        }
    }
}

impl VersionSource for FixedSource {
    fn runtime_version(&self) -> Result<String> {
        self.answer.clone().map_err(GateError::detection)
    }
}
