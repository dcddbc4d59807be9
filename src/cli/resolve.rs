//! Resolve command.
//!
//! Show the resolved credentials and which tier supplied each field.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::Project;
use crate::core::credentials::{Field, Resolution};
use crate::error::Result;

/// Show resolved signing credentials.
pub fn execute(
    dir: &Path,
    secrets_file: Option<PathBuf>,
    json: bool,
    show_secrets: bool,
) -> Result<()> {
    let project = Project::open(dir)?;
    let secrets_file = project.secrets_file(secrets_file);
    let resolution = project.resolver(&secrets_file).resolve();
    let loaded = resolution.secrets_loaded();

    if json {
        let result = serde_json::json!({
            "credentials": credentials_json(&resolution, show_secrets),
            "sources": sources_json(&resolution),
            "secrets_file": {
                "path": secrets_file.display().to_string(),
                "found": loaded,
            },
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::section("Signing credentials");
    for field in Field::ALL {
        output::kv_note(
            field.property_key(),
            display_value(&resolution, field, show_secrets),
            resolution.source(field),
        );
    }
    output::blank();

    let status = if loaded {
        "found"
    } else if secrets_file.exists() {
        "ignored"
    } else {
        "not found"
    };
    output::kv_note("secrets file", output::path(&secrets_file), status);

    if !show_secrets {
        output::blank();
        output::dimmed("passwords masked, use --show-secrets to print them");
    }

    Ok(())
}

/// Field value as printed, masked unless `show_secrets`.
pub(crate) fn display_value(resolution: &Resolution, field: Field, show_secrets: bool) -> String {
    if field.is_secret() && !show_secrets {
        output::MASK.to_string()
    } else {
        resolution.credentials.get(field)
    }
}

/// Credentials as a JSON object keyed by secrets-file key.
pub(crate) fn credentials_json(resolution: &Resolution, show_secrets: bool) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = Field::ALL
        .iter()
        .map(|&field| {
            (
                field.property_key().to_string(),
                serde_json::Value::String(display_value(resolution, field, show_secrets)),
            )
        })
        .collect();
    serde_json::Value::Object(map)
}

fn sources_json(resolution: &Resolution) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = Field::ALL
        .iter()
        .map(|&field| {
            (
                field.property_key().to_string(),
                serde_json::json!(resolution.source(field)),
            )
        })
        .collect();
    serde_json::Value::Object(map)
}
