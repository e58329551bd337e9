//! The version gate decision.
//!
//! Reads the runtime version from a [VersionSource], parses its major
//! component and compares it against the configured minimum. The caller turns
//! the outcome into output and an exit status.

use crate::detect::VersionSource;
use crate::error::{GateError, Result};
use crate::version::RuntimeVersion;

/// Process exit status for a passed check.
pub const EXIT_OK: u8 = 0;

/// Process exit status for a failed check, whatever the reason.
pub const EXIT_FAILED: u8 = 1;

/// Checks the runtime reported by `source` against `min_major`.
///
/// # Returns
/// * `Ok(RuntimeVersion)` - The runtime is new enough
/// * `Err(GateError::UnsupportedVersion)` - The major version is below `min_major`
/// * `Err(GateError::Detection)` - The version could not be obtained or parsed
pub fn check<S: VersionSource + ?Sized>(source: &S, min_major: u64) -> Result<RuntimeVersion> {
    let raw = source.runtime_version()?;
    let version = RuntimeVersion::parse(&raw)?;

    tracing::debug!(
        major = version.major(),
        full = ?version.full(),
        min_major,
        "detected runtime {}",
        version
    );

    if !version.meets(min_major) {
        return Err(GateError::UnsupportedVersion {
            detected: version.raw().to_string(),
            required: min_major,
        });
    }

    Ok(version)
}

/// Maps a check result to the process exit status.
pub fn exit_code(result: &Result<RuntimeVersion>) -> u8 {
    match result {
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_FAILED,
    }
}
