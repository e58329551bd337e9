//! Localized message catalogue.
//!
//! Russian is the default language of every line the gate prints. English is
//! available for projects whose contributors do not read Russian.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "en")]
    English,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" | "russian" => Ok(Language::Russian),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unsupported language '{}' (expected ru or en)", other)),
        }
    }
}

/// Message texts for one language, with the remediation hints filled in from
/// the configuration.
#[derive(Debug, Clone)]
pub struct Messages {
    language: Language,
    install_script: String,
    download_url: String,
}

impl Messages {
    pub fn new(language: Language) -> Self {
        Self::from_config(&Config {
            language,
            ..Config::default()
        })
    }

    pub fn from_config(config: &Config) -> Self {
        Messages {
            language: config.language,
            install_script: config.install_script.clone(),
            download_url: config.download_url.clone(),
        }
    }

    /// `✓ Node.js v20.10.0 - OK`
    pub fn success(&self, version: &str) -> String {
        format!("✓ Node.js {} - OK", version)
    }

    pub fn required(&self, min_major: u64) -> String {
        match self.language {
            Language::Russian => format!(
                "❌ Ошибка: Требуется Node.js версии {} или выше",
                min_major
            ),
            Language::English => format!(
                "❌ Error: Node.js version {} or newer is required",
                min_major
            ),
        }
    }

    pub fn current(&self, version: &str) -> String {
        match self.language {
            Language::Russian => format!("   Текущая версия: {}", version),
            Language::English => format!("   Current version: {}", version),
        }
    }

    pub fn detection_failed(&self, reason: &str) -> String {
        match self.language {
            Language::Russian => format!("❌ Ошибка при проверке Node.js: {}", reason),
            Language::English => format!("❌ Failed to check Node.js: {}", reason),
        }
    }

    pub fn config_failed(&self, reason: &str) -> String {
        match self.language {
            Language::Russian => format!("❌ Ошибка в настройках node-gate: {}", reason),
            Language::English => format!("❌ Invalid node-gate settings: {}", reason),
        }
    }

    /// Remediation instructions, one entry per line.
    pub fn remediation(&self) -> Vec<String> {
        match self.language {
            Language::Russian => vec![
                "Установите Node.js:".to_string(),
                format!("  1. Запустите: npm run {}", self.install_script),
                format!("  2. Или скачайте с {}", self.download_url),
            ],
            Language::English => vec![
                "Install Node.js:".to_string(),
                format!("  1. Run: npm run {}", self.install_script),
                format!("  2. Or download it from {}", self.download_url),
            ],
        }
    }
}
