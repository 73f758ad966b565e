//! Shared helpers for CLI end-to-end tests.

#![allow(dead_code, deprecated)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use tempfile::TempDir;

/// A markdown document exercising every card rule.
pub const STUDY_NOTES: &str = "\
# Rust notes

## What is ownership?
Each value has a single owner.

- Borrowing rules
  - Many shared references
  - Or one mutable reference

Shows the length of a vector. Useful for loops.
```rust
v.len()
```

A **slice** is a view into a `Vec`.
";

pub fn md_to_anki() -> Command {
    Command::new(cargo_bin("md-to-anki"))
}

/// Temporary directory holding one markdown file.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Failed to read output")
    }
}
