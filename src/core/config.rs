//! Project configuration.
//!
//! Reads the optional `.signcfg.toml` from the app module directory. Every
//! key is optional; a missing file means built-in paths and defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::credentials::Defaults;
use crate::error::{ConfigError, Result};

/// Contents of `.signcfg.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub signing: SigningSection,
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// `[signing]` section: where to look for files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SigningSection {
    /// Secrets file, relative to the module directory
    pub secrets_file: Option<PathBuf>,
    /// Keystore whose presence enables release signing
    pub release_keystore: Option<PathBuf>,
}

/// `[defaults]` section: overrides for the fallback literals.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    pub key_alias: Option<String>,
    pub key_password: Option<String>,
    pub store_file: Option<String>,
    pub store_password: Option<String>,
}

impl Config {
    /// Path of the config file inside `dir`
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(constants::CONFIG_FILE)
    }

    /// Load `.signcfg.toml` from `dir`, or built-in settings if it is absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if a default literal is empty.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::config_path(dir);

        if !path.exists() {
            debug!(path = %path.display(), "no project config, using built-in settings");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        Ok(config)
    }

    /// Parse and validate config text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::InvalidValue`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty default literals and empty paths
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on the first offending key.
    pub fn validate(&self) -> Result<()> {
        let d = &self.defaults;
        let literals = [
            ("defaults.key_alias", &d.key_alias),
            ("defaults.key_password", &d.key_password),
            ("defaults.store_file", &d.store_file),
            ("defaults.store_password", &d.store_password),
        ];
        for (field, value) in literals {
            if matches!(value, Some(v) if v.is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }

        let paths = [
            ("signing.secrets_file", &self.signing.secrets_file),
            ("signing.release_keystore", &self.signing.release_keystore),
        ];
        for (field, value) in paths {
            if matches!(value, Some(p) if p.as_os_str().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "path must not be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Fallback literals with any overrides applied
    pub fn defaults(&self) -> Defaults {
        let mut defaults = Defaults::default();
        let d = &self.defaults;
        if let Some(v) = &d.key_alias {
            defaults.key_alias = v.clone();
        }
        if let Some(v) = &d.key_password {
            defaults.key_password = v.clone();
        }
        if let Some(v) = &d.store_file {
            defaults.store_file = v.clone();
        }
        if let Some(v) = &d.store_password {
            defaults.store_password = v.clone();
        }
        defaults
    }

    /// Secrets file path resolved against `dir`
    pub fn secrets_file(&self, dir: &Path) -> PathBuf {
        let rel = self
            .signing
            .secrets_file
            .as_deref()
            .unwrap_or_else(|| Path::new(constants::SECRETS_FILE));
        dir.join(rel)
    }

    /// Release keystore path resolved against `dir`
    pub fn release_keystore(&self, dir: &Path) -> PathBuf {
        let rel = self
            .signing
            .release_keystore
            .as_deref()
            .unwrap_or_else(|| Path::new(constants::RELEASE_KEYSTORE));
        dir.join(rel)
    }
}
