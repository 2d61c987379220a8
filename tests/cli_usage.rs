//! Argument errors are clap's job: they exit non-zero with usage text
//! before any handler runs, leaving the filesystem untouched.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

#[test]
fn missing_positional_exits_nonzero_with_usage_and_no_side_effects() {
    let tmp = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_devmate"))
        .arg("tf")
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "no usage text in: {stderr}");
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn invalid_flag_exits_nonzero_with_usage_and_no_side_effects() {
    let tmp = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_devmate"))
        .args(["dashboard", "--bogus"])
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn help_flag_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_devmate"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}
