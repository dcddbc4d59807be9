//! signcfg - resolve Android release-signing configuration.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Show resolved credentials and their sources
//! │   ├── select        # Show which identity a build signs with
//! │   ├── export        # Write credentials as env, properties or JSON
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .signcfg.toml management
//!     ├── credentials   # SigningCredentials, Field, provenance
//!     ├── identity      # Release vs debug identity, build types
//!     ├── properties    # key.properties parsing
//!     ├── resolver      # Precedence chain and identity selection
//!     └── source        # Secrets file, environment, defaults
//! ```
//!
//! # Resolution
//!
//! Each of the four signing fields comes from the first of these that has a
//! non-empty value: the `key.properties` secrets file, the `SIGNING_*`
//! environment variables, the built-in defaults. A release build signs with
//! the resolved credentials only when the release keystore exists; otherwise
//! it falls back to the toolchain's debug identity.
//!
//! ```no_run
//! use signcfg::core::resolver::SigningConfigResolver;
//! use signcfg::core::source::ProcessEnv;
//! use std::path::{Path, PathBuf};
//!
//! let resolver = SigningConfigResolver::new(Some(PathBuf::from("key.properties")), ProcessEnv);
//! let identity = resolver.select_signing_identity(Path::new("upt-lab-keystore.jks"));
//! println!("signing with {}", identity.name());
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::credentials::{Field, SigningCredentials, SourceKind};
pub use crate::core::identity::{BuildType, SigningIdentity};
pub use crate::core::resolver::{resolve_credentials, SigningConfigResolver};
pub use crate::core::source::{EnvLookup, MapEnv, ProcessEnv};
