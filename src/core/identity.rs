//! Signing identity selection types.

use std::fmt;

use crate::core::credentials::SigningCredentials;

/// Build variant being packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BuildType {
    Debug,
    #[default]
    Release,
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildType::Debug => f.write_str("debug"),
            BuildType::Release => f.write_str("release"),
        }
    }
}

/// The identity a build is signed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningIdentity {
    /// Resolved release credentials.
    Release(SigningCredentials),
    /// The toolchain's own debug identity.
    Debug,
}

impl SigningIdentity {
    pub fn is_release(&self) -> bool {
        matches!(self, SigningIdentity::Release(_))
    }

    /// Release credentials, if selected.
    pub fn credentials(&self) -> Option<&SigningCredentials> {
        match self {
            SigningIdentity::Release(creds) => Some(creds),
            SigningIdentity::Debug => None,
        }
    }

    /// Short name: `release` or `debug`.
    pub fn name(&self) -> &'static str {
        match self {
            SigningIdentity::Release(_) => "release",
            SigningIdentity::Debug => "debug",
        }
    }
}
