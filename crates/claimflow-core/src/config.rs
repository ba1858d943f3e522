//! Shell configuration model.

use serde::{Deserialize, Serialize};

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notifications_enabled() -> bool {
    true
}

fn default_theme() -> String {
    "light".to_string()
}

/// Ambient configuration for the shell.
///
/// Stored as TOML under the platform config directory and created with
/// defaults on first run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Log filter passed to the tracing subscriber (e.g. "info", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether the notification scope should attempt registration
    #[serde(default = "default_notifications_enabled")]
    pub notifications_enabled: bool,
    /// Named theme; only "light" ships today
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            notifications_enabled: default_notifications_enabled(),
            theme: default_theme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.notifications_enabled);
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ShellConfig = toml::from_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.notifications_enabled);
        assert_eq!(config.theme, "light");
    }
}
