use std::env;
use std::path::PathBuf;
use std::process::Command;

use crate::detect::VersionSource;
use crate::error::{GateError, Result};

/// Set by npm for lifecycle scripts, e.g. `npm/10.2.3 node/v20.10.0 linux x64`.
pub const USER_AGENT_VAR: &str = "npm_config_user_agent";

/// Set by npm for lifecycle scripts: the Node.js binary running npm itself.
pub const NODE_EXECPATH_VAR: &str = "npm_node_execpath";

const DEFAULT_NODE_BINARY: &str = "node";

/// Detects the version of the Node.js runtime the gate runs under.
///
/// Sources, first answer wins:
/// 1. an explicit override
/// 2. the `node/<version>` token of the npm user agent
/// 3. `<node binary> --version`
#[derive(Debug, Clone)]
pub struct EnvironmentSource {
    override_version: Option<String>,
    user_agent: Option<String>,
    node_binary: PathBuf,
}

impl EnvironmentSource {
    /// Builds a source from the process environment.
    ///
    /// `node_binary` takes precedence over `npm_node_execpath`, which takes
    /// precedence over `node` on `PATH`.
    pub fn from_env(override_version: Option<String>, node_binary: Option<PathBuf>) -> Self {
        let node_binary = node_binary
            .or_else(|| env::var_os(NODE_EXECPATH_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NODE_BINARY));

        EnvironmentSource {
            override_version,
            user_agent: env::var(USER_AGENT_VAR).ok(),
            node_binary,
        }
    }

    /// Builds a source that only runs the given binary.
    pub fn with_binary(node_binary: impl Into<PathBuf>) -> Self {
        EnvironmentSource {
            override_version: None,
            user_agent: None,
            node_binary: node_binary.into(),
        }
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn override_version(mut self, version: impl Into<String>) -> Self {
        self.override_version = Some(version.into());
        self
    }

    fn query_binary(&self) -> Result<String> {
        let binary = self.node_binary.display();
        tracing::debug!("running {} --version", binary);

        let output = Command::new(&self.node_binary)
            .arg("--version")
            .output()
            .map_err(|e| GateError::detection(format!("cannot run {}: {}", binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GateError::detection(format!(
                "{} --version exited with {}: {}",
                binary,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|_| {
            GateError::detection(format!("{} --version printed non UTF-8 output", binary))
        })
    }
}

/// Extracts the Node.js version from an npm user agent string.
///
/// # Example
/// ```
/// use node_gate::detect::environment::version_from_user_agent;
///
/// assert_eq!(
///     version_from_user_agent("npm/10.2.3 node/v20.10.0 linux x64 workspaces/false"),
///     Some("v20.10.0".to_string())
/// );
/// assert_eq!(version_from_user_agent("yarn/1.22.19 npm/? bun/1.0.0"), None);
/// ```
pub fn version_from_user_agent(user_agent: &str) -> Option<String> {
    if let Ok(re) = regex::Regex::new(r"(?:^|\s)node/(\S+)") {
        if let Some(captures) = re.captures(user_agent) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

impl VersionSource for EnvironmentSource {
    fn runtime_version(&self) -> Result<String> {
        if let Some(version) = &self.override_version {
            tracing::debug!("using explicit runtime version {:?}", version);
            return Ok(version.clone());
        }

        if let Some(version) = self.user_agent.as_deref().and_then(version_from_user_agent) {
            tracing::debug!("runtime version {} taken from npm user agent", version);
            return Ok(version);
        }

        self.query_binary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_override_wins() {
        let source = EnvironmentSource::with_binary("/nonexistent/node")
            .user_agent("npm/10.2.3 node/v20.10.0 linux x64")
            .override_version("v16.0.0");
        assert_eq!(source.runtime_version().unwrap(), "v16.0.0");
    }

    #[test]
    fn test_user_agent_before_binary() {
        let source = EnvironmentSource::with_binary("/nonexistent/node")
            .user_agent("npm/9.8.1 node/v18.17.1 darwin arm64 workspaces/false");
        assert_eq!(source.runtime_version().unwrap(), "v18.17.1");
    }

    #[test]
    fn test_user_agent_without_node_token() {
        assert_eq!(version_from_user_agent(""), None);
        assert_eq!(version_from_user_agent("pnpm/8.6.0 npm/? nodejs/v20"), None);
    }

    #[test]
    #[serial]
    fn test_missing_binary_is_detection_error() {
        let source = EnvironmentSource::with_binary("/nonexistent/node-gate-test-binary");
        let err = source.runtime_version().unwrap_err();
        assert!(matches!(err, GateError::Detection(_)));
        assert!(err.to_string().contains("cannot run"));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_binary_output() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh\necho v20.10.0").unwrap();
        drop(file);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let source = EnvironmentSource::with_binary(&path);
        assert_eq!(source.runtime_version().unwrap(), "v20.10.0\n");
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_binary_failure_status() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh\necho broken >&2\nexit 3").unwrap();
        drop(file);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = EnvironmentSource::with_binary(&path)
            .runtime_version()
            .unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
