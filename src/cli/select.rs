//! Select command.
//!
//! Report whether a build signs with the release credentials or falls back
//! to the debug identity.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::Project;
use crate::core::fs;
use crate::core::identity::{BuildType, SigningIdentity};
use crate::error::Result;

/// Show the signing identity for `build_type`.
pub fn execute(
    dir: &Path,
    build_type: BuildType,
    keystore: Option<PathBuf>,
    secrets_file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let project = Project::open(dir)?;
    let keystore = project.release_keystore(keystore);
    let secrets_file = project.secrets_file(secrets_file);

    let identity = project
        .resolver(&secrets_file)
        .signing_for(build_type, &keystore);
    let keystore_found = fs::is_file(&keystore);

    if json {
        let credentials = identity.credentials().map(|creds| {
            serde_json::json!({
                "keyAlias": creds.key_alias(),
                "storeFile": creds.store_file().display().to_string(),
            })
        });
        let result = serde_json::json!({
            "build_type": build_type.to_string(),
            "identity": identity.name(),
            "keystore": {
                "path": keystore.display().to_string(),
                "found": keystore_found,
            },
            "credentials": credentials,
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::section(&format!("Signing identity ({} build)", build_type));
    output::kv("identity", identity.name());
    output::kv_note(
        "keystore",
        output::path(&keystore),
        if keystore_found { "found" } else { "missing" },
    );

    match &identity {
        SigningIdentity::Release(creds) => {
            output::kv("keyAlias", creds.key_alias());
            output::kv("storeFile", creds.store_file().display());
            output::blank();
            output::success("release build will be signed with the release key");
        }
        SigningIdentity::Debug if build_type == BuildType::Debug => {
            output::blank();
            output::dimmed("debug builds always use the debug identity");
        }
        SigningIdentity::Debug => {
            output::blank();
            output::warn("release keystore missing, release build falls back to debug signing");
            output::hint(&format!(
                "provide a keystore at {} to sign with the release key",
                keystore.display()
            ));
        }
    }

    Ok(())
}
