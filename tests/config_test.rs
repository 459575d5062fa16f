//! Integration tests for Settings config loading with layered merge semantics.
//!
//! These tests pass the global config location explicitly, so a real
//! `~/.config/orgtree/orgtree.toml` on the machine never leaks in.

use std::fs;

use tempfile::TempDir;

use orgtree::application::ApplicationError;
use orgtree::config::{DisplayStyle, Settings};

#[test]
fn given_missing_global_file_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("orgtree.toml");

    let settings = Settings::load_from(Some(global.as_path()), None).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_and_explicit_file_when_load_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("orgtree.toml");
    fs::write(
        &global,
        r#"
confirm_replace = false

[display]
bullet = "*"
indent = "    "
"#,
    )
    .unwrap();
    let local = dir.path().join("local.toml");
    fs::write(
        &local,
        r#"
[display]
bullet = ">"
style = "tree"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(global.as_path()), Some(local.as_path())).expect("load settings");

    assert!(!settings.confirm_replace, "global scalar kept");
    assert_eq!(settings.display.indent, "    ", "global value kept");
    assert_eq!(settings.display.bullet, ">", "explicit file overrides global");
    assert_eq!(settings.display.style, DisplayStyle::Tree);
    assert_eq!(settings.display.empty_marker, "(empty team)", "default kept");
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("broken.toml");
    fs::write(&local, "confirm_replace = [").unwrap();

    let err = Settings::load_from(None, Some(local.as_path())).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Settings::load_from(None, Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_new_path_when_write_template_then_creates_dirs_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("orgtree.toml");

    Settings::write_template(&path, false).expect("write template");
    assert_eq!(fs::read_to_string(&path).unwrap(), Settings::template());

    let err = Settings::write_template(&path, false).unwrap_err();
    assert!(err.to_string().contains("already exists"));

    Settings::write_template(&path, true).expect("force overwrite");
}

#[test]
fn given_template_as_config_when_load_then_matches_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orgtree.toml");
    fs::write(&path, Settings::template()).unwrap();

    let settings = Settings::load_from(None, Some(path.as_path())).unwrap();
    assert_eq!(settings, Settings::default());
}
