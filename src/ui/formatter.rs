//! Pure formatting functions for gate output.
//!
//! Everything here builds plain lines of text; coloring and printing live in
//! the parent module.

use crate::error::GateError;
use crate::messages::Messages;

/// The block printed when the runtime is older than required.
pub fn unsupported_lines(messages: &Messages, detected: &str, required: u64) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        messages.required(required),
        messages.current(detected),
        String::new(),
    ];
    lines.extend(messages.remediation());
    lines.push(String::new());
    lines
}

/// The block printed when the version could not be obtained or parsed.
pub fn detection_failure_lines(messages: &Messages, reason: &str) -> Vec<String> {
    let mut lines = vec![messages.detection_failed(reason), String::new()];
    lines.extend(messages.remediation());
    lines.push(String::new());
    lines
}

/// The block printed when the settings (file, flags or variables) are
/// unusable.
pub fn config_failure_lines(messages: &Messages, reason: &str) -> Vec<String> {
    let mut lines = vec![messages.config_failed(reason), String::new()];
    lines.extend(messages.remediation());
    lines.push(String::new());
    lines
}

/// The block printed for any gate error.
pub fn failure_lines(messages: &Messages, error: &GateError) -> Vec<String> {
    match error {
        GateError::UnsupportedVersion { detected, required } => {
            unsupported_lines(messages, detected, *required)
        }
        GateError::Config(reason) => config_failure_lines(messages, reason),
        GateError::Detection(reason) => detection_failure_lines(messages, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Language;

    #[test]
    fn test_unsupported_block_layout() {
        let messages = Messages::new(Language::Russian);
        let lines = unsupported_lines(&messages, "v16.20.1", 18);
        assert_eq!(
            lines,
            vec![
                "",
                "❌ Ошибка: Требуется Node.js версии 18 или выше",
                "   Текущая версия: v16.20.1",
                "",
                "Установите Node.js:",
                "  1. Запустите: npm run install-node",
                "  2. Или скачайте с https://nodejs.org/",
                "",
            ]
        );
    }

    #[test]
    fn test_detection_block_layout() {
        let messages = Messages::new(Language::Russian);
        let lines = detection_failure_lines(&messages, "empty version string");
        assert_eq!(
            lines[0],
            "❌ Ошибка при проверке Node.js: empty version string"
        );
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Установите Node.js:");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_failure_lines_dispatch() {
        let messages = Messages::new(Language::English);
        let err = GateError::UnsupportedVersion {
            detected: "v12.0.0".to_string(),
            required: 18,
        };
        let lines = failure_lines(&messages, &err);
        assert!(lines[1].contains("18"));
        assert!(lines[2].contains("v12.0.0"));

        let err = GateError::detection("node not found");
        let lines = failure_lines(&messages, &err);
        assert_eq!(lines[0], "❌ Failed to check Node.js: node not found");
    }

    #[test]
    fn test_config_block_is_localized() {
        let messages = Messages::new(Language::Russian);
        let lines = failure_lines(&messages, &GateError::config("nodegate.toml: bad value"));
        assert_eq!(
            lines[0],
            "❌ Ошибка в настройках node-gate: nodegate.toml: bad value"
        );
        assert!(!lines[0].contains("Configuration error"));
        assert_eq!(lines[2], "Установите Node.js:");
    }
}
