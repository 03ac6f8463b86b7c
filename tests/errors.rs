// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::scribe_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_root_fails_with_error() {
    scribe_cmd()
        .arg("this/root/does/not/exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot transcribe root"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_file_root_fails_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let file_path = temp.path().join("plain.txt");
    fs::write(&file_path, "not a directory")?;

    scribe_cmd()
        .arg(&file_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot transcribe root"))
        .stdout(predicate::str::is_empty());

    temp.close()?;
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unlistable_subdirectory_does_not_abort() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir()?;
    fs::write(temp.path().join("a.txt"), "A")?;
    let locked = temp.path().join("locked");
    fs::create_dir(&locked)?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    let assert = scribe_cmd()
        .arg(temp.path())
        .arg("--no-header")
        .assert();

    // Restore permissions so the tempdir can be cleaned up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    assert
        .success()
        .stdout(predicate::str::contains("/a.txt: "))
        .stdout(predicate::str::contains("## /locked/"))
        .stdout(predicate::str::contains("Error listing "));

    temp.close()?;
    Ok(())
}
