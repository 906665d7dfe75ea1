use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

fn docdir() -> Command {
    let mut cmd = Command::cargo_bin("docdir").expect("docdir binary should be built");
    cmd.env_remove("DOCDIR_PATH");
    cmd
}

#[test]
fn test_creates_nested_directory() -> TestResult {
    let root = assert_fs::TempDir::new()?;
    let target = root.child("x/y/z");

    docdir()
        .arg(target.path())
        .assert()
        .success()
        .stdout(format!(
            "Created directory: {}\nDirectory exists: true\nReady to create documentation files\n",
            target.path().display()
        ));

    target.assert(predicate::path::is_dir());
    Ok(())
}

#[test]
fn test_existing_directory_is_idempotent() -> TestResult {
    let root = assert_fs::TempDir::new()?;
    let target = root.child("x/y/z");
    target.create_dir_all()?;

    let first = docdir().arg(target.path()).assert().success();
    let second = docdir().arg(target.path()).assert().success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
    assert_eq!(std::fs::read_dir(target.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_blocked_by_file() -> TestResult {
    let root = assert_fs::TempDir::new()?;
    let blocked = root.child("blocked");
    blocked.write_str("plain file")?;

    docdir()
        .arg(blocked.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not a directory"));

    blocked.assert("plain file");
    Ok(())
}

#[test]
fn test_blocked_by_file_with_trailing_slash() -> TestResult {
    let root = assert_fs::TempDir::new()?;
    let blocked = root.child("blocked");
    blocked.write_str("plain file")?;

    docdir()
        .arg(format!("{}/", blocked.path().display()))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "Not a directory: {}",
            blocked.path().display()
        )));

    blocked.assert("plain file");
    Ok(())
}

#[test]
fn test_blocked_ancestor_creates_nothing() -> TestResult {
    let root = assert_fs::TempDir::new()?;
    root.child("blocked").write_str("plain file")?;

    docdir()
        .arg(root.child("blocked/docs/api").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));

    assert_eq!(std::fs::read_dir(root.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_empty_path_is_rejected() {
    docdir()
        .arg("")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_default_path_is_docs() -> TestResult {
    let root = assert_fs::TempDir::new()?;

    docdir()
        .current_dir(root.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created directory: docs\n"));

    root.child("docs").assert(predicate::path::is_dir());
    Ok(())
}

#[test]
fn test_path_from_env() -> TestResult {
    let root = assert_fs::TempDir::new()?;
    let target = root.child("from-env");

    docdir()
        .env("DOCDIR_PATH", target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory exists: true"));

    target.assert(predicate::path::is_dir());
    Ok(())
}

#[test]
fn test_verbose_logs_to_stderr() -> TestResult {
    let root = assert_fs::TempDir::new()?;

    docdir()
        .arg("--verbose")
        .arg(root.child("docs").path())
        .assert()
        .success()
        .stderr(predicate::str::contains("action: ensure directory"));
    Ok(())
}

#[test]
fn test_rejects_unknown_log_level() {
    docdir()
        .args(["--log-level", "loud", "docs"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
