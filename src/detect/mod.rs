//! Runtime version detection
//!
//! The gate asks a [VersionSource] for the raw version identifier of the
//! Node.js runtime it guards. Implementations:
//!
//! - [environment::EnvironmentSource]: the real host environment (explicit
//!   override, npm user agent, then `node --version`)
//! - [fixed::FixedSource]: a canned answer for tests

pub mod environment;
pub mod fixed;

pub use environment::EnvironmentSource;
pub use fixed::FixedSource;

use crate::error::Result;

/// Something that can report the raw runtime version identifier.
///
/// Implementations return the identifier untouched (e.g. `"v20.10.0\n"`);
/// parsing is the caller's job. Any fault while obtaining it is a
/// [crate::error::GateError::Detection].
pub trait VersionSource {
    fn runtime_version(&self) -> Result<String>;
}
