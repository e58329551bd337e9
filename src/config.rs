use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GateError, Result};
use crate::messages::Language;

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = "nodegate.toml";

/// Name of the per-user configuration file inside the user config directory.
pub const USER_CONFIG_FILE: &str = ".nodegate.toml";

fn default_min_major() -> u64 {
    18
}

fn default_install_script() -> String {
    "install-node".to_string()
}

fn default_download_url() -> String {
    "https://nodejs.org/".to_string()
}

/// Configuration for the version gate.
///
/// Every field has a default, so an empty file (or no file at all) gives the
/// stock behavior: Node.js 18 or newer, Russian messages.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Lowest accepted major version.
    #[serde(default = "default_min_major")]
    pub min_major: u64,

    #[serde(default)]
    pub language: Language,

    /// npm script suggested in the remediation text (`npm run <script>`).
    #[serde(default = "default_install_script")]
    pub install_script: String,

    #[serde(default = "default_download_url")]
    pub download_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_major: default_min_major(),
            language: Language::default(),
            install_script: default_install_script(),
            download_url: default_download_url(),
        }
    }
}

/// Values given on the command line or through `NODE_GATE_*` variables.
/// They win over anything read from a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub min_major: Option<u64>,
    pub language: Option<Language>,
}

impl Config {
    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(min_major) = overrides.min_major {
            self.min_major = min_major;
        }
        if let Some(language) = overrides.language {
            self.language = language;
        }
        self
    }
}

/// Finds the configuration file to use, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `nodegate.toml` in the current directory
/// 3. `.nodegate.toml` in the user config directory
fn locate_config(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file exists (or was named explicitly) but cannot be read
///   or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let Some(path) = locate_config(config_path) else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path).map_err(|e| {
        GateError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| GateError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.min_major, 18);
        assert_eq!(config.language, Language::Russian);
        assert_eq!(config.install_script, "install-node");
        assert_eq!(config.download_url, "https://nodejs.org/");
    }

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_text() {
        let config = parse_config("min_major = 20\nlanguage = \"en\"\n").unwrap();
        assert_eq!(config.min_major, 20);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.install_script, "install-node");
    }

    #[test]
    fn test_invalid_text() {
        assert!(parse_config("min_major = \"eighteen\"").is_err());
        assert!(parse_config("language = \"de\"").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            min_major: Some(22),
            language: None,
        };
        let config = Config::default().with_overrides(&overrides);
        assert_eq!(config.min_major, 22);
        assert_eq!(config.language, Language::Russian);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/nodegate.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
