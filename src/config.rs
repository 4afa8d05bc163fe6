//! Configuration loading for taskgate
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::PathBuf;

use crate::engine::DEFAULT_MAX_SCAN_BYTES;
use crate::error::ConfigError;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: true,
            audit_path: Some("~/.taskgate/audit.jsonl".to_string()),
        }
    }
}

/// Limits applied per check
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Ceiling on bytes scanned per task (0 = unlimited)
    pub max_scan_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_scan_bytes: DEFAULT_MAX_SCAN_BYTES,
        }
    }
}

/// Rule source configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Path to a custom ruleset file; unset means the embedded ruleset
    pub ruleset_file: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    pub general: GeneralConfig,
    pub limits: LimitsConfig,
    pub rules: RulesConfig,
}

impl GateConfig {
    /// Load configuration from the standard locations or use defaults.
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".taskgate/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/taskgate/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        GateConfig::default()
    }

    /// Load from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GateConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings.
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded).
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }

    /// Get the custom ruleset path (expanded).
    pub fn ruleset_path(&self) -> Option<PathBuf> {
        self.rules.ruleset_file.as_ref().map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = true
audit_path = "~/.taskgate/audit.jsonl"

[limits]
max_scan_bytes = 65536

[rules]
# ruleset_file = "~/.taskgate/ruleset.toml"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert!(config.general.audit_log);
        assert_eq!(config.limits.max_scan_bytes, DEFAULT_MAX_SCAN_BYTES);
        assert!(config.rules.ruleset_file.is_none());
    }

    #[test]
    fn test_parse_embedded_config() {
        let config: GateConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert!(config.general.audit_log);
        assert_eq!(config.limits.max_scan_bytes, 65536);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GateConfig = toml::from_str("[limits]\nmax_scan_bytes = 1024\n").unwrap();
        assert_eq!(config.limits.max_scan_bytes, 1024);
        assert!(config.general.audit_log);
    }

    #[test]
    fn test_expand_path() {
        let expanded = GateConfig::expand_path("~/.taskgate/audit.jsonl");
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let err = GateConfig::load_from(std::path::Path::new("/nonexistent/config.toml"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }
}
