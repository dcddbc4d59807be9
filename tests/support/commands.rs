//! Command helper methods for Test.

use super::fixtures::SIGNING_VARS;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a signcfg command running in the module directory.
    ///
    /// The `SIGNING_*` and `SIGNCFG_*` variables of the test process are
    /// removed and colors are disabled.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("signcfg").expect("failed to find signcfg binary");
        for var in SIGNING_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("SIGNCFG_SECRETS_FILE");
        cmd.env_remove("SIGNCFG_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `signcfg` with `args` and the extra environment `vars`.
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        cmd.args(args);
        for (k, v) in vars {
            cmd.env(k, v);
        }
        cmd.output().expect("failed to run signcfg")
    }

    /// Shortcut for `signcfg <args>`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Shortcut for `signcfg resolve --json --show-secrets`.
    pub fn resolve_json(&self, vars: &[(&str, &str)]) -> serde_json::Value {
        let output = self.run_with_env(&["resolve", "--json", "--show-secrets"], vars);
        super::assert_success(&output);
        super::stdout_json(&output)
    }

    /// Shortcut for `signcfg select --json`.
    pub fn select_json(&self, extra: &[&str]) -> serde_json::Value {
        let mut args = vec!["select", "--json"];
        args.extend_from_slice(extra);
        let output = self.run(&args);
        super::assert_success(&output);
        super::stdout_json(&output)
    }
}
