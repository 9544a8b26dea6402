//! E2E smoke tests for the catview binary
//!
//! Exercise the paths that exit before the terminal is taken over: help,
//! argument validation, configuration errors and missing input.

use std::path::PathBuf;
use std::process::{Command, Output};

const NO_CONFIG: &str = "/nonexistent/catview/config.toml";

fn catview(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_catview"))
        .args(args)
        .env_remove("CATVIEW_PAGE_SIZE")
        .env_remove("CATVIEW_DEBOUNCE_MS")
        .output()
        .expect("Failed to spawn catview")
}

#[test]
fn smoke_help_flag() {
    let output = catview(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("search and page through a JSON item catalog"));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--page-size"));
    assert!(stdout.contains("--debounce-ms"));
}

#[test]
fn smoke_rejects_zero_page_size_flag() {
    let output = catview(&["--config", NO_CONFIG, "--page-size", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("page-size"), "got: {stderr}");
}

#[test]
fn smoke_rejects_zero_page_size_from_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_catview"))
        .args(["--config", NO_CONFIG])
        .env("CATVIEW_PAGE_SIZE", "0")
        .output()
        .expect("Failed to spawn catview");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("InvalidValue"), "got: {stderr}");
}

#[test]
fn smoke_reports_invalid_config_file() {
    let config = std::env::temp_dir().join("catview_e2e_bad_config.toml");
    std::fs::write(&config, "page_size = \"lots\"\n").expect("write config");

    let output = catview(&["--config", config.to_str().expect("utf-8 temp path")]);
    let _ = std::fs::remove_file(&config);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("ParseError"), "got: {stderr}");
}

#[test]
fn smoke_reports_missing_catalog_file() {
    let log_dir = std::env::temp_dir().join("catview_e2e_logs");
    let config = std::env::temp_dir().join("catview_e2e_missing_file.toml");
    std::fs::write(
        &config,
        format!("log_file_path = {:?}\n", log_dir.join("e2e.log").display().to_string()),
    )
    .expect("write config");

    let missing = PathBuf::from("/nonexistent/catview/catalog.json");
    let output = catview(&[
        "--config",
        config.to_str().expect("utf-8 temp path"),
        missing.to_str().expect("utf-8 path"),
    ]);
    let _ = std::fs::remove_file(&config);
    let _ = std::fs::remove_dir_all(&log_dir);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("FileNotFound"), "got: {stderr}");
}
