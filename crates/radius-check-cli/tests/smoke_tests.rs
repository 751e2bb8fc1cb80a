//! Smoke tests for the check-radius binary
//!
//! Each test builds a throwaway site tree and runs the binary inside it with
//! no arguments, the way a build script would.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command for the check-radius binary
fn check_radius() -> Command {
    let mut cmd = Command::cargo_bin("check-radius").expect("check-radius binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    check_radius()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    check_radius()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("--format"));
}

// ============================================================================
// Scan Tests
// ============================================================================

#[test]
fn test_clean_tree_exits_zero() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "src/index.css", "* { border-radius: 0; }\n");
    write(temp.path(), "src/App.tsx", "<main className=\"rounded-none\" />\n");

    check_radius()
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Radius check passed"));
}

#[test]
fn test_empty_directory_exits_zero() {
    let temp = TempDir::new().expect("create temp dir");

    check_radius()
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Radius check passed"));
}

#[test]
fn test_css_violation_exits_one() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "src/styles/site.css", "body {}\n.card { border-radius: 2px; }\n");

    check_radius()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("site.css:2"))
        .stderr(predicate::str::contains("border-radius: 2px"))
        .stderr(predicate::str::contains("Fix: remove all rounded-*"))
        .stdout(predicate::str::contains("passed").not());
}

#[test]
fn test_failure_listing_ends_with_blank_line() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "src/a.css", ".a { border-radius: 2px; }\n");

    check_radius()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::ends_with("resolve to 0.\n\n"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_exits_one() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "src/locked/a.css", ".a { border-radius: 4px; }\n");
    let locked = temp.path().join("src/locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can list the directory regardless of its mode.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = check_radius().current_dir(temp.path()).output().unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: I/O error"), "stderr: {stderr}");
    assert!(stderr.contains("locked"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_index_html_is_scanned() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "index.html", "<body>\n<div class=\"md:hover:rounded-xl\"></div>\n</body>\n");

    check_radius()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("index.html:2"))
        .stderr(predicate::str::contains("md:hover:rounded-xl"));
}

#[test]
fn test_root_flag() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "site/src/a.jsx", "const s = { borderRadius: \"8px\" };\n");

    check_radius()
        .arg("--root")
        .arg(temp.path().join("site"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("borderRadius: \"8px\""));
}

#[test]
fn test_repeated_runs_identical() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "src/a.tsx", "rounded-md\nrounded-lg\n");

    let first = check_radius().current_dir(temp.path()).output().unwrap();
    let second = check_radius().current_dir(temp.path()).output().unwrap();
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn test_json_format() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "src/a.css", ".x { border-radius: 4px; }");

    let output = check_radius()
        .current_dir(temp.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["violations"][0]["token"], "border-radius: 4px");
    assert_eq!(value["violations"][0]["line"], 1);
    assert_eq!(value["violations"][0]["file"], "src/a.css");
    assert_eq!(value["files"][0], "src/a.css");
}

#[test]
fn test_quiet_suppresses_success() {
    let temp = TempDir::new().expect("create temp dir");

    check_radius()
        .current_dir(temp.path())
        .arg("--quiet")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_file_disables_rule() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "radius-check.yaml", "rules:\n  rounded_utility: false\n");
    write(temp.path(), "src/a.tsx", "<div className=\"rounded-xl\" />");

    check_radius().current_dir(temp.path()).assert().code(0);
}

#[test]
fn test_invalid_config_reports_error() {
    let temp = TempDir::new().expect("create temp dir");
    write(temp.path(), "radius-check.yaml", "scan_dirs: 12\n");

    check_radius()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Configuration error"));
}

#[test]
fn test_show_config() {
    let temp = TempDir::new().expect("create temp dir");

    check_radius()
        .current_dir(temp.path())
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"))
        .stdout(predicate::str::contains("rounded_utility"));
}
