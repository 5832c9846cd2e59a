//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: it mutates process environment.

use std::path::PathBuf;

use tempfile::TempDir;

use bstree::config::Settings;

#[test]
fn given_env_vars_when_load_then_they_override_config_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("bstree.toml");
    std::fs::write(
        &config,
        "data_dir = \"/from/file\"\nstore_file = \"file.json\"\npretty_json = true\n",
    )
    .unwrap();
    std::env::set_var("BSTREE_DATA_DIR", "/from/env");
    std::env::set_var("BSTREE_PRETTY_JSON", "false");

    // Act
    let settings = Settings::load(Some(&config)).expect("load settings");

    // Assert
    assert_eq!(settings.data_dir, PathBuf::from("/from/env"));
    assert_eq!(settings.store_file, "file.json");
    assert!(!settings.pretty_json);

    std::env::remove_var("BSTREE_DATA_DIR");
    std::env::remove_var("BSTREE_PRETTY_JSON");
}
