use crate::error::{GateError, Result};
use std::fmt;

/// A runtime version identifier as reported by Node.js (e.g. `v20.10.0`).
///
/// Only the major component takes part in the gate decision. The full
/// semantic version is kept when the identifier happens to be strict semver,
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersion {
    raw: String,
    major: i64,
    full: Option<semver::Version>,
}

impl RuntimeVersion {
    /// Parses a version identifier.
    ///
    /// Surrounding whitespace is trimmed and one leading non-digit marker
    /// (`v`, `V`) is dropped. The major version is the run of leading digits
    /// in the first `.`-separated segment, so `18-nightly.1` reads as 18. A
    /// sign before the digits is honored: `v-5.0.0` reads as -5.
    ///
    /// # Example
    /// ```
    /// use node_gate::version::RuntimeVersion;
    ///
    /// let v = RuntimeVersion::parse("v18.2.0").unwrap();
    /// assert_eq!(v.major(), 18);
    /// assert_eq!(v.raw(), "v18.2.0");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(GateError::detection("empty version string"));
        }

        let unmarked = match raw.chars().next() {
            Some(c) if !c.is_ascii_digit() => &raw[c.len_utf8()..],
            _ => raw,
        };

        let first = unmarked.split('.').next().unwrap_or_default();
        let (negative, unsigned) = match first.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, first.strip_prefix('+').unwrap_or(first)),
        };
        let digits_end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..digits_end];
        if digits.is_empty() {
            return Err(GateError::detection(format!(
                "cannot read a major version from '{}'",
                raw
            )));
        }

        let signed = if negative {
            format!("-{}", digits)
        } else {
            digits.to_string()
        };
        let major = signed.parse::<i64>().map_err(|e| {
            GateError::detection(format!("invalid major version '{}': {}", signed, e))
        })?;

        Ok(RuntimeVersion {
            raw: raw.to_string(),
            major,
            full: semver::Version::parse(unmarked).ok(),
        })
    }

    /// The identifier as detected, without surrounding whitespace.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn major(&self) -> i64 {
        self.major
    }

    /// The full semantic version, when the identifier is strict semver.
    pub fn full(&self) -> Option<&semver::Version> {
        self.full.as_ref()
    }

    /// Whether this version satisfies the given minimum major version.
    pub fn meets(&self, min_major: u64) -> bool {
        i64::try_from(min_major).map_or(false, |min| self.major >= min)
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
