//! Candidate sources for credential values.
//!
//! Each tier of the precedence chain implements [`Source`]. The resolver walks
//! an ordered list of sources and takes the first value it gets back.
//!
//! ## Adding a New Source
//!
//! 1. Implement the `Source` trait
//! 2. Insert it into the chain built by `SigningConfigResolver`
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl Source for Vault {
//!     fn kind(&self) -> SourceKind { /* ... */ }
//!     fn lookup(&self, field: Field) -> Option<String> {
//!         // Fetch from the vault
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::credentials::{Defaults, Field, SourceKind};
use crate::core::fs;
use crate::core::properties::Properties;

/// A tier in the resolution chain.
pub trait Source {
    /// Which tier this is.
    fn kind(&self) -> SourceKind;

    /// Value for `field`, or `None` to defer to the next tier.
    ///
    /// Empty values are reported as `None`.
    fn lookup(&self, field: Field) -> Option<String>;
}

/// Read access to environment variables.
///
/// Injected into the resolver so tests never touch the real process
/// environment.
pub trait EnvLookup {
    fn var(&self, name: &str) -> Option<String>;
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// The current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Values from the local secrets file.
///
/// A missing or unreadable file contributes nothing.
#[derive(Debug, Default)]
pub struct SecretsFileSource {
    props: Option<Properties>,
}

impl SecretsFileSource {
    /// Load the secrets file at `path`, if there is one.
    pub fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            debug!(path = %path.display(), "no secrets file");
            return Self::default();
        }

        if !fs::is_file(path) {
            warn!(path = %path.display(), "secrets file is not a regular file, ignoring");
            return Self::default();
        }

        match Properties::load(path) {
            Ok(props) => {
                debug!(path = %path.display(), entries = props.len(), "loaded secrets file");
                Self { props: Some(props) }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read secrets file, ignoring");
                Self::default()
            }
        }
    }

    /// Whether a file was loaded.
    pub fn is_loaded(&self) -> bool {
        self.props.is_some()
    }

    /// Path of the loaded file.
    pub fn path(&self) -> Option<&Path> {
        self.props.as_ref()?.path()
    }
}

impl Source for SecretsFileSource {
    fn kind(&self) -> SourceKind {
        SourceKind::SecretsFile
    }

    fn lookup(&self, field: Field) -> Option<String> {
        self.props
            .as_ref()?
            .get(field.property_key())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

/// Values from `SIGNING_*` environment variables.
pub struct EnvironmentSource<E> {
    env: E,
}

impl<E: EnvLookup> EnvironmentSource<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvLookup> Source for EnvironmentSource<E> {
    fn kind(&self) -> SourceKind {
        SourceKind::Environment
    }

    fn lookup(&self, field: Field) -> Option<String> {
        self.env.var(field.env_var()).filter(|v| !v.is_empty())
    }
}

/// The fixed fallback literals.
#[derive(Debug, Default)]
pub struct DefaultSource {
    defaults: Defaults,
}

impl DefaultSource {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }
}

impl Source for DefaultSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Default
    }

    fn lookup(&self, field: Field) -> Option<String> {
        Some(self.defaults.get(field).to_string()).filter(|v| !v.is_empty())
    }
}
