//! Constants used throughout signcfg.
//!
//! Centralizes recognized keys, variable names, and fallback literals.

/// Project configuration file name, looked up in the module directory.
pub const CONFIG_FILE: &str = ".signcfg.toml";

/// Secrets file, relative to the module directory.
pub const SECRETS_FILE: &str = "key.properties";

/// Keystore whose presence switches release builds to the release identity.
pub const RELEASE_KEYSTORE: &str = "upt-lab-keystore.jks";

/// Secrets file keys.
pub const PROP_KEY_ALIAS: &str = "keyAlias";
pub const PROP_KEY_PASSWORD: &str = "keyPassword";
pub const PROP_STORE_FILE: &str = "storeFile";
pub const PROP_STORE_PASSWORD: &str = "storePassword";

/// Environment variables consulted when the secrets file has no value.
pub const ENV_KEY_ALIAS: &str = "SIGNING_KEY_ALIAS";
pub const ENV_KEY_PASSWORD: &str = "SIGNING_KEY_PASSWORD";
pub const ENV_STORE_PATH: &str = "SIGNING_STORE_PATH";
pub const ENV_STORE_PASSWORD: &str = "SIGNING_STORE_PASSWORD";

/// Fallback literals for local and lab builds.
pub const DEFAULT_KEY_ALIAS: &str = "upt-lab-key";
pub const DEFAULT_KEY_PASSWORD: &str = "upt123456";
pub const DEFAULT_STORE_FILE: &str = "upt-lab-keystore.jks";
pub const DEFAULT_STORE_PASSWORD: &str = "upt123456";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SIGNCFG_LOG";
