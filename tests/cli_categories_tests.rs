//! End-to-end tests for `tplgal categories`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the tplgal binary
fn tplgal_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tplgal")
}

#[test]
fn test_categories_text_output() {
    let (_dir, registry) = small_registry_file();

    let output = Command::new(tplgal_bin())
        .args(["categories", "--registry"])
        .arg(&registry)
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Listing categories should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Categories (2):"));
    assert!(stdout.contains("blog"));
    assert!(stdout.contains("landing-page"));
    assert!(stdout.contains("Technologies (1):"));
    assert!(stdout.contains("tailwind-css"));
}

#[test]
fn test_categories_json_with_derived_counts() {
    let (_dir, registry) = small_registry_file();

    let output = Command::new(tplgal_bin())
        .args(["categories", "--json", "--registry"])
        .arg(&registry)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let categories = result["categories"].as_array().expect("categories array");
    assert_eq!(categories.len(), 2);

    // Fixture taxonomy carries no counts; the loader derives them from
    // the actual records.
    assert_eq!(categories[0]["id"], "blog");
    assert_eq!(categories[0]["count"].as_u64().unwrap(), 2);
    assert_eq!(categories[1]["id"], "landing-page");
    assert_eq!(categories[1]["count"].as_u64().unwrap(), 2);

    let technologies = result["technologies"].as_array().expect("tech array");
    assert_eq!(technologies[0]["id"], "tailwind-css");
    assert_eq!(technologies[0]["count"].as_u64().unwrap(), 2);
}

#[test]
fn test_categories_builtin_catalog() {
    // No --registry flag, no config in CI: falls back to the embedded
    // catalog, which always has both taxonomy sections populated.
    let output = Command::new(tplgal_bin())
        .args(["categories", "--json"])
        .env("XDG_CONFIG_HOME", std::env::temp_dir())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert!(!result["categories"].as_array().unwrap().is_empty());
    assert!(!result["technologies"].as_array().unwrap().is_empty());
}

#[test]
fn test_categories_missing_registry_file_fails() {
    let output = Command::new(tplgal_bin())
        .args(["categories", "--registry", "/nonexistent/registry.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load registry"));
}
