// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn scribe_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("repo-scribe"))
}
