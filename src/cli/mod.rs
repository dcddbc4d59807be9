//! Command-line interface.

pub mod completions;
pub mod export;
pub mod output;
pub mod resolve;
pub mod select;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::identity::BuildType;
use crate::core::resolver::SigningConfigResolver;
use crate::core::source::ProcessEnv;
use crate::error::Result;

/// signcfg - resolve Android release-signing configuration.
#[derive(Parser)]
#[command(
    name = "signcfg",
    about = "Resolve Android release-signing credentials",
    version,
    after_help = "Precedence: key.properties > SIGNING_* environment > defaults"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// App module directory (where build.gradle lives)
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show resolved signing credentials and where each value came from
    Resolve {
        /// Secrets file to read instead of the configured one
        #[arg(long, env = "SIGNCFG_SECRETS_FILE")]
        secrets_file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print passwords instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Show which signing identity a build would use
    Select {
        /// Build type being packaged
        #[arg(long, value_enum, default_value_t = BuildType::Release)]
        build_type: BuildType,
        /// Release keystore to check for instead of the configured one
        #[arg(long)]
        keystore: Option<PathBuf>,
        /// Secrets file to read instead of the configured one
        #[arg(long, env = "SIGNCFG_SECRETS_FILE")]
        secrets_file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write resolved credentials in a format a build can consume
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Env)]
        format: ExportFormat,
        /// Secrets file to read instead of the configured one
        #[arg(long, env = "SIGNCFG_SECRETS_FILE")]
        secrets_file: Option<PathBuf>,
        /// Write to a file (mode 0600) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Export formats.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// SIGNING_*=value lines
    Env,
    /// key.properties
    Properties,
    /// JSON object
    Json,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command against the module directory `dir`.
pub fn execute(command: Command, dir: &Path) -> Result<()> {
    use Command::*;

    match command {
        Resolve {
            secrets_file,
            json,
            show_secrets,
        } => resolve::execute(dir, secrets_file, json, show_secrets),
        Select {
            build_type,
            keystore,
            secrets_file,
            json,
        } => select::execute(dir, build_type, keystore, secrets_file, json),
        Export {
            format,
            secrets_file,
            output,
        } => export::execute(dir, format, secrets_file, output),
        Completions { shell } => completions::execute(shell),
    }
}

/// Project context shared by the commands.
pub(crate) struct Project {
    pub dir: PathBuf,
    pub config: Config,
}

impl Project {
    /// Load `.signcfg.toml` from `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        Ok(Self {
            dir: dir.to_path_buf(),
            config: Config::load(dir)?,
        })
    }

    /// Secrets file: the override if given, else the configured path.
    /// Relative overrides are taken from the module directory.
    pub fn secrets_file(&self, overridden: Option<PathBuf>) -> PathBuf {
        match overridden {
            Some(path) => self.dir.join(path),
            None => self.config.secrets_file(&self.dir),
        }
    }

    /// Release keystore: the override if given, else the configured path.
    pub fn release_keystore(&self, overridden: Option<PathBuf>) -> PathBuf {
        match overridden {
            Some(path) => self.dir.join(path),
            None => self.config.release_keystore(&self.dir),
        }
    }

    /// Resolver over the process environment and configured defaults.
    pub fn resolver(&self, secrets_file: &Path) -> SigningConfigResolver {
        SigningConfigResolver::new(Some(secrets_file.to_path_buf()), ProcessEnv)
            .with_defaults(self.config.defaults())
    }
}
