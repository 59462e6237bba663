//! Integration tests driving the compiled `contentgen-ctl` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

fn contentgen_ctl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_contentgen-ctl"))
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(contentgen_ctl_bin())
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute contentgen-ctl")
}

/// Input directory with a provider-only config and one `Note` entity.
fn create_input(tool_version: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let config = format!(
        r#"{{
    "toolVersion": "{tool_version}",
    "projectPackageId": "org.sample.notes",
    "providerJavaPackage": "org.sample.notes.provider",
    "providerClassName": "NotesProvider",
    "sqliteHelperClassName": "NotesSQLiteOpenHelper",
    "authority": "org.sample.notes.provider",
    "databaseFileName": "notes.db",
    "enableForeignKeys": false,
    "generateApi": false,
    "generateViews": false,
    "generateModels": false
}}"#
    );
    fs::write(dir.path().join("_config.json"), config).unwrap();
    fs::write(
        dir.path().join("Note.json"),
        r#"{ "fields": [{ "name": "body", "type": "string", "nullable": false }] }"#,
    )
    .unwrap();
    dir
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_help_prints_usage_without_generating() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--input"), "stdout: {stdout}");
    assert!(stdout.contains("--output"), "stdout: {stdout}");
    assert!(stdout.contains("--templates"), "stdout: {stdout}");
}

#[test]
fn test_missing_required_args_fails() {
    let output = run(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_generates_provider_files() {
    let input = create_input(env!("CARGO_PKG_VERSION"));
    let out = tempfile::tempdir().unwrap();

    let output = run(&["-i", path_arg(input.path()), "-o", path_arg(out.path())]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");

    let provider = out.path().join("org/sample/notes/provider");
    assert!(provider.join("note/NoteColumns.java").is_file());
    assert!(provider.join("NotesProvider.java").is_file());
    assert!(provider.join("NotesSQLiteOpenHelper.java").is_file());
    assert!(out.path().join("__add_to_manifest.txt").is_file());
    assert!(!out.path().join("org/sample/notes/api").exists());

    assert!(stdout.contains("NoteColumns.java"), "stdout: {stdout}");
    assert!(stdout.contains("provider, manifest"), "stdout: {stdout}");
}

#[test]
fn test_verbose_logs_resolved_paths_to_stderr() {
    let input = create_input(env!("CARGO_PKG_VERSION"));
    let out = tempfile::tempdir().unwrap();

    let output = run(&["-i", path_arg(input.path()), "-o", path_arg(out.path()), "-v"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Resolved generation paths"), "stderr: {stderr}");
    assert!(stderr.contains("Generation finished"), "stderr: {stderr}");
}

#[test]
fn test_missing_config_exits_non_zero() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let output = run(&["-i", path_arg(input.path()), "-o", path_arg(out.path())]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("_config.json"), "stderr: {stderr}");
}

#[test]
fn test_version_mismatch_is_reported() {
    let input = create_input("9.9.9");
    let out = tempfile::tempdir().unwrap();

    let output = run(&["-i", path_arg(input.path()), "-o", path_arg(out.path())]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("9.9.9"), "stderr: {stderr}");
    assert!(!out.path().join("__add_to_manifest.txt").exists());
}

#[test]
fn test_missing_template_dir_fails() {
    let input = create_input(env!("CARGO_PKG_VERSION"));
    let out = tempfile::tempdir().unwrap();
    let missing = input.path().join("no-such-templates");

    let output = run(&[
        "-i",
        path_arg(input.path()),
        "-o",
        path_arg(out.path()),
        "-t",
        path_arg(&missing),
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("template directory not found"), "stderr: {stderr}");
}
