//! Export command.
//!
//! Write the resolved credentials, unmasked, as environment assignments,
//! a `key.properties` file, or JSON.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::resolve::credentials_json;
use crate::cli::{ExportFormat, Project};
use crate::core::credentials::{Field, SigningCredentials};
use crate::core::fs;
use crate::core::properties::Properties;
use crate::error::Result;

/// Export resolved credentials to stdout or `output_path`.
pub fn execute(
    dir: &Path,
    format: ExportFormat,
    secrets_file: Option<PathBuf>,
    output_path: Option<PathBuf>,
) -> Result<()> {
    let project = Project::open(dir)?;
    let secrets_file = project.secrets_file(secrets_file);
    let resolution = project.resolver(&secrets_file).resolve();

    let content = match format {
        ExportFormat::Env => to_env(&resolution.credentials),
        ExportFormat::Properties => to_properties(&resolution.credentials).to_string(),
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&credentials_json(&resolution, true))?;
            json.push('\n');
            json
        }
    };

    match output_path {
        Some(path) => {
            fs::write_private(&path, &content)?;
            output::success(&format!("wrote {}", path.display()));
        }
        None => output::data(&content),
    }

    Ok(())
}

/// `SIGNING_*=value` lines, quoting values that need it.
pub fn to_env(creds: &SigningCredentials) -> String {
    let mut out = String::new();

    for field in Field::ALL {
        let value = creds.get(field);
        if needs_quotes(&value) {
            out.push_str(&format!("{}=\"{}\"\n", field.env_var(), escape_env_value(&value)));
        } else {
            out.push_str(&format!("{}={}\n", field.env_var(), value));
        }
    }

    out
}

/// The credentials as a `key.properties` file.
pub fn to_properties(creds: &SigningCredentials) -> Properties {
    Properties::from_pairs(
        Field::ALL
            .iter()
            .map(|&field| (field.property_key().to_string(), creds.get(field)))
            .collect(),
    )
}

fn needs_quotes(value: &str) -> bool {
    value.chars().any(|ch| ch.is_whitespace())
        || value.contains('#')
        || value.contains('=')
        || value.contains('"')
        || value.contains('\'')
        || value.contains('\\')
        || value.contains('$')
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
