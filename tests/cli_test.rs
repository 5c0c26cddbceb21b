//! Integration tests for the verify-dist binary.
//!
//! Each test drops a stand-in `generate_verifications.py` shell script into a
//! temp dir and runs the binary there. The tests run serially: a script that
//! is exec'd while another thread's fork still holds it open for writing
//! fails with "Text file busy".
#![cfg(unix)]
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const LEADING: &str = "==> Generating verification site into ./dist\n";

const TRAILING: &str = "\
==> Build complete: ./dist is ready
Next steps (not run automatically):
  git add dist
  git commit -m \"Rebuild verification site\"
  git push
";

/// Write a fake generator that records its arguments, then runs `body`.
fn setup_generator(body: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > args.txt\n{}\n",
        body
    );
    write_executable(temp.path(), &script, 0o755);
    temp
}

fn write_executable(dir: &Path, contents: &str, mode: u32) {
    let path = dir.join("generate_verifications.py");
    fs::write(&path, contents).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
}

fn verify_dist(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("verify-dist"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn recorded_args(dir: &Path) -> String {
    fs::read_to_string(dir.join("args.txt")).unwrap()
}

#[test]
#[serial]
fn success_prints_banners_and_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("exit 0");

    verify_dist(temp.path())
        .assert()
        .success()
        .stdout(format!("{}{}", LEADING, TRAILING));
    Ok(())
}

#[test]
#[serial]
fn generator_receives_exact_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("exit 0");

    verify_dist(temp.path()).assert().success();

    assert_eq!(
        recorded_args(temp.path()),
        "--out\n./dist\n--clean\n--cache-meta\n"
    );
    Ok(())
}

#[test]
#[serial]
fn generator_output_passes_through_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("echo 'Wrote: dist/abc.html'\necho 'warning: slow' >&2");

    verify_dist(temp.path())
        .assert()
        .success()
        .stdout(format!("{}Wrote: dist/abc.html\n{}", LEADING, TRAILING))
        .stderr("warning: slow\n");
    Ok(())
}

#[test]
#[serial]
fn failure_exits_with_generator_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("echo 'Error: registrants.json not found.' >&2\nexit 1");

    verify_dist(temp.path())
        .assert()
        .code(1)
        .stdout(LEADING)
        .stderr("Error: registrants.json not found.\n");
    Ok(())
}

#[test]
#[serial]
fn failure_propagates_non_trivial_codes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("exit 7");

    verify_dist(temp.path())
        .assert()
        .code(7)
        .stdout(predicate::str::contains("git push").not());
    Ok(())
}

#[test]
#[serial]
fn killed_generator_reports_shell_style_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("kill -9 $$");

    verify_dist(temp.path()).assert().code(137).stdout(LEADING);
    Ok(())
}

#[test]
#[serial]
fn missing_generator_fails_with_127() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    verify_dist(temp.path())
        .assert()
        .code(127)
        .stdout(LEADING)
        .stderr(predicate::str::contains("generate_verifications.py: not found"));
    Ok(())
}

#[test]
#[serial]
fn non_executable_generator_fails_with_126() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_executable(temp.path(), "#!/bin/sh\nexit 0\n", 0o644);

    verify_dist(temp.path())
        .assert()
        .code(126)
        .stdout(LEADING)
        .stderr(predicate::str::contains("Permission denied"));
    Ok(())
}

#[test]
#[serial]
fn extra_arguments_are_rejected_without_running() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("exit 0");

    verify_dist(temp.path())
        .arg("--out")
        .arg("elsewhere")
        .assert()
        .code(2)
        .stdout("");
    assert!(!temp.path().join("args.txt").exists());
    Ok(())
}

#[test]
#[serial]
fn shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    verify_dist(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verification site"));
    Ok(())
}

#[test]
#[serial]
fn shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    verify_dist(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn failed_banner_write_aborts_before_generator() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("exit 0");
    let full = fs::OpenOptions::new().write(true).open("/dev/full")?;

    let output = std::process::Command::new(cargo_bin("verify-dist"))
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .stdout(full)
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("IO error"));
    assert!(!temp.path().join("args.txt").exists());
    Ok(())
}

#[test]
#[serial]
fn deleted_working_directory_fails_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_generator("exit 0");
    fs::create_dir(temp.path().join("gone"))?;

    Command::new("/bin/sh")
        .current_dir(temp.path())
        .arg("-c")
        .arg("cd gone && rmdir \"$PWD\" && exec \"$0\"")
        .arg(cargo_bin("verify-dist"))
        .env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("cannot determine working directory"));
    assert!(!temp.path().join("args.txt").exists());
    Ok(())
}
