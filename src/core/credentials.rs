//! Signing credential types.
//!
//! `SigningCredentials` is the resolved value handed to the packaging step.
//! `Field` names its four parts and knows where each one is looked up.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

use crate::core::constants;

/// One of the four signing credential fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    KeyAlias,
    KeyPassword,
    StoreFile,
    StorePassword,
}

impl Field {
    /// All fields in resolution order.
    pub const ALL: [Field; 4] = [
        Field::KeyAlias,
        Field::KeyPassword,
        Field::StoreFile,
        Field::StorePassword,
    ];

    /// Key in the secrets file.
    pub fn property_key(self) -> &'static str {
        match self {
            Field::KeyAlias => constants::PROP_KEY_ALIAS,
            Field::KeyPassword => constants::PROP_KEY_PASSWORD,
            Field::StoreFile => constants::PROP_STORE_FILE,
            Field::StorePassword => constants::PROP_STORE_PASSWORD,
        }
    }

    /// Environment variable consulted for this field.
    pub fn env_var(self) -> &'static str {
        match self {
            Field::KeyAlias => constants::ENV_KEY_ALIAS,
            Field::KeyPassword => constants::ENV_KEY_PASSWORD,
            Field::StoreFile => constants::ENV_STORE_PATH,
            Field::StorePassword => constants::ENV_STORE_PASSWORD,
        }
    }

    /// Whether the value must be masked in output.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::KeyPassword | Field::StorePassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property_key())
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    SecretsFile,
    Environment,
    Default,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::SecretsFile => "secrets file",
            SourceKind::Environment => "environment",
            SourceKind::Default => "default",
        };
        f.write_str(name)
    }
}

/// Resolved signing identity for a release build.
///
/// Passwords are wiped on drop and redacted from `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningCredentials {
    key_alias: String,
    key_password: Zeroizing<String>,
    store_file: PathBuf,
    store_password: Zeroizing<String>,
}

impl SigningCredentials {
    pub fn new(
        key_alias: impl Into<String>,
        key_password: impl Into<String>,
        store_file: impl Into<PathBuf>,
        store_password: impl Into<String>,
    ) -> Self {
        Self {
            key_alias: key_alias.into(),
            key_password: Zeroizing::new(key_password.into()),
            store_file: store_file.into(),
            store_password: Zeroizing::new(store_password.into()),
        }
    }

    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    /// Keystore path resolved against `base` when relative.
    pub fn store_path(&self, base: &Path) -> PathBuf {
        if self.store_file.is_absolute() {
            self.store_file.clone()
        } else {
            base.join(&self.store_file)
        }
    }

    /// Value of `field` as text.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::KeyAlias => self.key_alias.clone(),
            Field::KeyPassword => self.key_password.to_string(),
            Field::StoreFile => self.store_file.display().to_string(),
            Field::StorePassword => self.store_password.to_string(),
        }
    }
}

impl fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"***")
            .field("store_file", &self.store_file)
            .field("store_password", &"***")
            .finish()
    }
}

/// Literals used when neither the secrets file nor the environment has a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub key_alias: String,
    pub key_password: String,
    pub store_file: String,
    pub store_password: String,
}

impl Defaults {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::KeyAlias => &self.key_alias,
            Field::KeyPassword => &self.key_password,
            Field::StoreFile => &self.store_file,
            Field::StorePassword => &self.store_password,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            key_alias: constants::DEFAULT_KEY_ALIAS.to_string(),
            key_password: constants::DEFAULT_KEY_PASSWORD.to_string(),
            store_file: constants::DEFAULT_STORE_FILE.to_string(),
            store_password: constants::DEFAULT_STORE_PASSWORD.to_string(),
        }
    }
}

/// Credentials together with the source of each field.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub credentials: SigningCredentials,
    pub sources: [(Field, SourceKind); 4],
    /// Secrets file that was actually read, if any
    pub secrets_file: Option<PathBuf>,
}

impl Resolution {
    /// Source that supplied `field`.
    pub fn source(&self, field: Field) -> SourceKind {
        self.sources
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, s)| *s)
            .unwrap_or(SourceKind::Default)
    }

    /// Whether the secrets file was read and took part in resolution.
    pub fn secrets_loaded(&self) -> bool {
        self.secrets_file.is_some()
    }

    pub fn into_credentials(self) -> SigningCredentials {
        self.credentials
    }
}
