//! Application configuration loading from config.toml
//!
//! Mock mode, the ledger slot location, and the chain settings are all
//! explicit configuration handed to the components at construction; nothing
//! in the crate reads a global flag. The file is optional: a missing
//! config.toml yields the defaults, and `STREET_LEDGER_*` environment
//! variables override individual fields either way.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

fn default_mock_mode() -> bool {
    true
}

fn default_ledger_path() -> String {
    "data/street_ledger.json".to_string()
}

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// When true, debts live purely in the on-device ledger slot and no
    /// transaction is ever submitted to a chain.
    #[serde(default = "default_mock_mode")]
    pub mock_mode: bool,
    /// Location of the on-device ledger slot.
    #[serde(default = "default_ledger_path")]
    pub ledger_path: String,
    /// Street Ledger Move package id; required only in live mode.
    #[serde(default)]
    pub package_id: Option<String>,
    /// The user's own address; used as the default creditor.
    #[serde(default)]
    pub self_address: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mock_mode: default_mock_mode(),
            ledger_path: default_ledger_path(),
            package_id: None,
            self_address: None,
        }
    }
}

impl AppConfig {
    /// Overrides individual fields from an environment-style lookup.
    ///
    /// Recognized keys: `STREET_LEDGER_MOCK_MODE` (`true`/`false`/`1`/`0`),
    /// `STREET_LEDGER_PATH`, `STREET_LEDGER_PACKAGE_ID`,
    /// `STREET_LEDGER_ADDRESS`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("STREET_LEDGER_MOCK_MODE") {
            self.mock_mode = match raw.trim() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(Error::Config {
                        message: format!("STREET_LEDGER_MOCK_MODE must be a boolean, got '{other}'"),
                    });
                }
            };
        }
        if let Some(path) = lookup("STREET_LEDGER_PATH") {
            self.ledger_path = path;
        }
        if let Some(package_id) = lookup("STREET_LEDGER_PACKAGE_ID") {
            self.package_id = Some(package_id);
        }
        if let Some(address) = lookup("STREET_LEDGER_ADDRESS") {
            self.self_address = Some(address);
        }
        Ok(())
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file exists but cannot be read, or the TOML is
/// invalid. A missing file is not an error; it yields [`AppConfig::default`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(Error::Config {
                message: format!("Failed to read config file: {e}"),
            });
        }
    };

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the full application configuration: ./config.toml (or defaults when
/// absent) with environment-variable overrides applied on top.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = load_config("config.toml")?;
    config.apply_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            mock_mode = false
            ledger_path = "/tmp/ledger.json"
            package_id = "0xPKG"
            self_address = "0xME"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.mock_mode);
        assert_eq!(config.ledger_path, "/tmp/ledger.json");
        assert_eq!(config.package_id.as_deref(), Some("0xPKG"));
        assert_eq!(config.self_address.as_deref(), Some("0xME"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.mock_mode);
        assert_eq!(config.ledger_path, "data/street_ledger.json");
        assert_eq!(config.package_id, None);
        assert_eq!(config.self_address, None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("nope.toml")).unwrap();
        assert!(config.mock_mode);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "mock_mode = maybe").unwrap();

        let result = load_config(&path);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("STREET_LEDGER_MOCK_MODE", "false"),
            ("STREET_LEDGER_PACKAGE_ID", "0xPKG"),
        ]);

        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(ToString::to_string))
            .unwrap();

        assert!(!config.mock_mode);
        assert_eq!(config.package_id.as_deref(), Some("0xPKG"));
        // Untouched fields keep their defaults
        assert_eq!(config.ledger_path, "data/street_ledger.json");
    }

    #[test]
    fn test_bad_mock_mode_override_is_rejected() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "STREET_LEDGER_MOCK_MODE").then(|| "maybe".to_string())
        });
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
