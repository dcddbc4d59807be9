//! Error handling tests.

use crate::support::*;

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    t.write(".signcfg.toml", "this is not valid toml { [ }");

    let output = t.run(&["resolve"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config");
}

#[test]
fn test_empty_default_in_config_fails() {
    let t = Test::new();
    t.write(".signcfg.toml", "[defaults]\nkey_alias = \"\"\n");

    let output = t.run(&["select"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "defaults.key_alias");
}

#[test]
fn test_unreadable_secrets_file_is_not_an_error() {
    let t = Test::new();
    std::fs::create_dir_all(t.path("key.properties")).unwrap();

    let json = t.resolve_json(&[]);
    assert_eq!(json["credentials"]["keyAlias"], DEFAULT_KEY_ALIAS);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let t = Test::new();
    let target = t.path("no/such/dir/out.env");

    let output = t.run(&["export", "-o", target.to_str().unwrap()]);
    assert_failure(&output);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();
    let output = t.run(&["sign"]);
    assert_failure(&output);
}

#[test]
fn test_error_goes_to_stderr_with_hint() {
    use predicates::prelude::*;

    let t = Test::new();
    t.write(".signcfg.toml", "[signing]\nbogus = 1\n");

    t.cmd()
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗"))
        .stdout(predicate::str::contains(".signcfg.toml"));
}
