//! Signing configuration resolution.
//!
//! Every credential field is resolved independently through the same ordered
//! chain of sources:
//!
//! 1. the local secrets file (`key.properties`), when it exists
//! 2. the `SIGNING_*` environment variables
//! 3. the fixed default literals
//!
//! The first source with a non-empty value wins. The last tier always answers,
//! so resolution cannot fail and never yields an empty field.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::credentials::{Defaults, Field, Resolution, SigningCredentials, SourceKind};
use crate::core::fs;
use crate::core::identity::{BuildType, SigningIdentity};
use crate::core::source::{
    DefaultSource, EnvLookup, EnvironmentSource, SecretsFileSource, Source,
};

/// Resolves release signing credentials and picks the identity a build uses.
pub struct SigningConfigResolver {
    secrets_file: Option<PathBuf>,
    env: Box<dyn EnvLookup>,
    defaults: Defaults,
}

impl SigningConfigResolver {
    /// Create a resolver reading `secrets_file` (if any) and `env`.
    pub fn new(secrets_file: Option<PathBuf>, env: impl EnvLookup + 'static) -> Self {
        Self {
            secrets_file,
            env: Box::new(env),
            defaults: Defaults::default(),
        }
    }

    /// Replace the fallback literals.
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Resolve credentials along with the source of each field.
    pub fn resolve(&self) -> Resolution {
        resolve_with(self.secrets_file.as_deref(), &*self.env, &self.defaults)
    }

    /// Resolve credentials.
    pub fn resolve_credentials(&self) -> SigningCredentials {
        self.resolve().into_credentials()
    }

    /// Release credentials if a keystore exists at `release_keystore`,
    /// otherwise the debug identity.
    pub fn select_signing_identity(&self, release_keystore: &Path) -> SigningIdentity {
        if fs::is_file(release_keystore) {
            debug!(keystore = %release_keystore.display(), "release keystore found");
            SigningIdentity::Release(self.resolve_credentials())
        } else {
            debug!(
                keystore = %release_keystore.display(),
                "release keystore missing, using debug identity"
            );
            SigningIdentity::Debug
        }
    }

    /// Identity for a given build type. Debug builds always use the debug identity.
    pub fn signing_for(&self, build_type: BuildType, release_keystore: &Path) -> SigningIdentity {
        match build_type {
            BuildType::Debug => SigningIdentity::Debug,
            BuildType::Release => self.select_signing_identity(release_keystore),
        }
    }
}

/// Resolve credentials from `secrets_file`, `env` and the built-in defaults.
pub fn resolve_credentials(secrets_file: Option<&Path>, env: &dyn EnvLookup) -> SigningCredentials {
    resolve_with(secrets_file, env, &Defaults::default()).into_credentials()
}

fn resolve_with(secrets_file: Option<&Path>, env: &dyn EnvLookup, defaults: &Defaults) -> Resolution {
    let secrets = SecretsFileSource::open(secrets_file);
    let loaded = secrets.path().map(Path::to_path_buf);

    let chain: Vec<Box<dyn Source + '_>> = vec![
        Box::new(secrets),
        Box::new(EnvironmentSource::new(env)),
        Box::new(DefaultSource::new(defaults.clone())),
    ];

    let [alias, key_password, store_file, store_password] =
        Field::ALL.map(|field| resolve_field(&chain, field));

    Resolution {
        credentials: SigningCredentials::new(
            alias.0,
            key_password.0,
            store_file.0,
            store_password.0,
        ),
        sources: [
            (Field::KeyAlias, alias.1),
            (Field::KeyPassword, key_password.1),
            (Field::StoreFile, store_file.1),
            (Field::StorePassword, store_password.1),
        ],
        secrets_file: loaded,
    }
}

fn resolve_field(chain: &[Box<dyn Source + '_>], field: Field) -> (String, SourceKind) {
    for source in chain {
        if let Some(value) = source.lookup(field) {
            debug!(field = %field, source = %source.kind(), "resolved");
            return (value, source.kind());
        }
    }

    // Only reachable when the default tier itself is empty
    let fallback = Defaults::default().get(field).to_string();
    (fallback, SourceKind::Default)
}
