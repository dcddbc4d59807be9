//! Test support utilities for signcfg integration tests.
//!
//! Provides an isolated module directory and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated app module directory.
///
/// Child processes run with `.current_dir()` and a scrubbed environment, so
/// tests can safely run in parallel.
pub struct Test {
    /// Temporary app module directory
    pub dir: TempDir,
}

impl Test {
    /// Create an empty module directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a module directory with a `key.properties` file.
    pub fn with_secrets(contents: &str) -> Self {
        let t = Self::new();
        t.write("key.properties", contents);
        t
    }

    /// Write a file relative to the module directory.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Create a placeholder release keystore.
    pub fn add_keystore(&self, rel: &str) -> PathBuf {
        self.write(rel, "not a real keystore")
    }

    /// Path inside the module directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}
