//! Tests for `signcfg resolve`.

use crate::support::*;

#[test]
fn test_resolve_defaults_without_inputs() {
    let t = Test::new();
    let json = t.resolve_json(&[]);

    assert_eq!(json["credentials"]["keyAlias"], DEFAULT_KEY_ALIAS);
    assert_eq!(json["credentials"]["keyPassword"], DEFAULT_PASSWORD);
    assert_eq!(json["credentials"]["storeFile"], DEFAULT_KEYSTORE);
    assert_eq!(json["credentials"]["storePassword"], DEFAULT_PASSWORD);
    assert_eq!(json["sources"]["keyAlias"], "default");
    assert_eq!(json["secrets_file"]["found"], false);
}

#[test]
fn test_resolve_mixed_sources() {
    let t = Test::with_secrets(ALIAS_ONLY);
    let json = t.resolve_json(&[("SIGNING_KEY_PASSWORD", "bar")]);

    assert_eq!(json["credentials"]["keyAlias"], "foo");
    assert_eq!(json["credentials"]["keyPassword"], "bar");
    assert_eq!(json["credentials"]["storeFile"], DEFAULT_KEYSTORE);
    assert_eq!(json["credentials"]["storePassword"], DEFAULT_PASSWORD);

    assert_eq!(json["sources"]["keyAlias"], "secrets-file");
    assert_eq!(json["sources"]["keyPassword"], "environment");
    assert_eq!(json["sources"]["storeFile"], "default");
    assert_eq!(json["secrets_file"]["found"], true);
}

#[test]
fn test_resolve_file_beats_environment() {
    let t = Test::with_secrets(FULL_SECRETS);
    let json = t.resolve_json(&[
        ("SIGNING_KEY_ALIAS", "env-alias"),
        ("SIGNING_KEY_PASSWORD", "env-kp"),
        ("SIGNING_STORE_PATH", "env.jks"),
        ("SIGNING_STORE_PASSWORD", "env-sp"),
    ]);

    assert_eq!(json["credentials"]["keyAlias"], "upload");
    assert_eq!(json["credentials"]["keyPassword"], "key-from-file");
    assert_eq!(json["credentials"]["storeFile"], "keys/upload.jks");
    assert_eq!(json["credentials"]["storePassword"], "store-from-file");
}

#[test]
fn test_resolve_environment_only() {
    let t = Test::new();
    let json = t.resolve_json(&[
        ("SIGNING_STORE_PATH", "/ci/release.jks"),
        ("SIGNING_STORE_PASSWORD", "ci-secret"),
    ]);

    assert_eq!(json["credentials"]["storeFile"], "/ci/release.jks");
    assert_eq!(json["credentials"]["storePassword"], "ci-secret");
    assert_eq!(json["sources"]["storeFile"], "environment");
    assert_eq!(json["credentials"]["keyAlias"], DEFAULT_KEY_ALIAS);
}

#[test]
fn test_resolve_masks_passwords_by_default() {
    let t = Test::with_secrets(FULL_SECRETS);
    let output = t.run(&["resolve"]);

    assert_success(&output);
    assert_stdout_contains(&output, "upload");
    assert_stdout_contains(&output, "********");
    assert_stdout_contains(&output, "secrets file");
    assert_stdout_excludes(&output, "key-from-file");
    assert_stdout_excludes(&output, "store-from-file");
}

#[test]
fn test_resolve_json_masks_without_show_secrets() {
    let t = Test::with_secrets(FULL_SECRETS);
    let output = t.run(&["resolve", "--json"]);

    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["credentials"]["keyPassword"], "********");
    assert_eq!(json["credentials"]["keyAlias"], "upload");
}

#[test]
fn test_resolve_explicit_secrets_file() {
    let t = Test::new();
    let path = t.write("secrets/release.properties", "keyAlias=explicit\n");

    let output = t.run(&[
        "resolve",
        "--json",
        "--secrets-file",
        path.to_str().unwrap(),
    ]);

    assert_success(&output);
    assert_eq!(stdout_json(&output)["credentials"]["keyAlias"], "explicit");
}

#[test]
fn test_resolve_dir_flag() {
    let t = Test::new();
    t.write("android/app/key.properties", "keyAlias=nested\n");

    let output = t.run(&["-C", "android/app", "resolve", "--json"]);

    assert_success(&output);
    assert_eq!(stdout_json(&output)["credentials"]["keyAlias"], "nested");
}

#[test]
fn test_resolve_uses_config_defaults_and_paths() {
    let t = Test::new();
    t.write(
        ".signcfg.toml",
        "[signing]\nsecrets_file = \"signing/key.properties\"\n\n[defaults]\nstore_password = \"lab-store\"\n",
    );
    t.write("signing/key.properties", "keyAlias=from-config-path\n");

    let json = t.resolve_json(&[]);

    assert_eq!(json["credentials"]["keyAlias"], "from-config-path");
    assert_eq!(json["credentials"]["storePassword"], "lab-store");
    assert_eq!(json["credentials"]["keyPassword"], DEFAULT_PASSWORD);
}

#[test]
fn test_resolve_empty_values_fall_through() {
    let t = Test::with_secrets("keyAlias=\n");
    let json = t.resolve_json(&[("SIGNING_KEY_ALIAS", "")]);

    assert_eq!(json["credentials"]["keyAlias"], DEFAULT_KEY_ALIAS);
    assert_eq!(json["sources"]["keyAlias"], "default");
}

#[test]
fn test_resolve_relative_secrets_file_is_taken_from_module_dir() {
    let t = Test::new();
    t.write("android/app/release.properties", "keyAlias=nested\n");

    let output = t.run(&[
        "-C",
        "android/app",
        "resolve",
        "--json",
        "--secrets-file",
        "release.properties",
    ]);

    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["credentials"]["keyAlias"], "nested");
    assert_eq!(json["secrets_file"]["found"], true);
}

#[test]
fn test_resolve_secrets_file_env_var_is_taken_from_module_dir() {
    let t = Test::new();
    t.write("android/app/ci.properties", "keyAlias=from-env-path\n");

    let output = t.run_with_env(
        &["-C", "android/app", "resolve", "--json"],
        &[("SIGNCFG_SECRETS_FILE", "ci.properties")],
    );

    assert_success(&output);
    assert_eq!(stdout_json(&output)["credentials"]["keyAlias"], "from-env-path");
}

#[test]
fn test_resolve_invalid_utf8_secrets_file_is_not_found() {
    let t = Test::new();
    std::fs::write(t.path("key.properties"), [b'k', b'=', 0xff]).unwrap();

    let json = t.resolve_json(&[]);

    assert_eq!(json["secrets_file"]["found"], false);
    assert_eq!(json["sources"]["keyAlias"], "default");

    let output = t.run(&["resolve"]);
    assert_success(&output);
    assert_stdout_contains(&output, "(ignored)");
}
