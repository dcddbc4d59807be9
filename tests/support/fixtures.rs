//! Test fixtures and constants.

/// A complete secrets file.
pub const FULL_SECRETS: &str = "\
# Release signing
keyAlias=upload
keyPassword=key-from-file
storeFile=keys/upload.jks
storePassword=store-from-file
";

/// Secrets file defining only the alias.
pub const ALIAS_ONLY: &str = "keyAlias=foo\n";

/// Environment variables recognized by the resolver.
pub const SIGNING_VARS: &[&str] = &[
    "SIGNING_KEY_ALIAS",
    "SIGNING_KEY_PASSWORD",
    "SIGNING_STORE_PATH",
    "SIGNING_STORE_PASSWORD",
];

pub const DEFAULT_KEY_ALIAS: &str = "upt-lab-key";
pub const DEFAULT_PASSWORD: &str = "upt123456";
pub const DEFAULT_KEYSTORE: &str = "upt-lab-keystore.jks";
