//! Configuration tests

use std::io::Write;

use tempfile::NamedTempFile;

use crate::config::{load_or_default, load_with_warnings, with_env_overrides, Config};
use crate::tree::RenderMode;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn defaults_are_sensible() {
    let config = Config::default();
    assert!(config.namespace_enabled("main"));
    assert!(config.namespace_enabled("category"));
    assert!(!config.namespace_enabled("talk"));
    assert!(!config.namespace_enabled("unknown"));
    assert!(config.toplevel_selectable);
    assert!(!config.enable_subpages);
    assert_eq!(config.max_depth, 10);
    assert_eq!(config.render_mode, RenderMode::Nested);
    assert!(config.root_for("main").is_none());
}

#[test]
fn load_full_config() {
    let file = write_config(
        r#"
enable_subpages = true
toplevel_selectable = false
max_depth = 3
render_mode = "flat"

[namespaces]
main = true
help = false

[roots]
main = "Contents"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert!(config.enable_subpages);
    assert!(!config.toplevel_selectable);
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.render_mode, RenderMode::Flat);
    assert!(config.namespace_enabled("main"));
    assert!(!config.namespace_enabled("help"));
    assert_eq!(config.root_for("main"), Some("Contents"));
}

#[test]
fn explicit_namespace_table_replaces_defaults() {
    let file = write_config("[namespaces]\nuser = true\n");
    let config = Config::load(file.path()).unwrap();
    assert!(config.namespace_enabled("user"));
    // The table replaces the default map entirely.
    assert!(!config.namespace_enabled("main"));
}

#[test]
fn empty_root_means_auto_detect() {
    let file = write_config("[roots]\nmain = \"\"\n");
    let config = Config::load(file.path()).unwrap();
    assert!(config.root_for("main").is_none());
}

#[test]
fn unknown_keys_produce_warnings() {
    let file = write_config("max_depth = 4\nmax_level = 7\n");
    let (config, warnings) = load_with_warnings(file.path()).unwrap();
    assert_eq!(config.max_depth, 4);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "max_level");
}

#[test]
fn invalid_toml_is_an_error() {
    let file = write_config("max_depth = \"not a number\"\n");
    assert!(Config::load(file.path()).is_err());
}

#[test]
fn load_or_default_without_file() {
    // Only fields without an environment override are asserted here, so
    // this stays stable next to the env test.
    let config = load_or_default(None);
    assert!(config.namespace_enabled("main"));
    assert!(config.root_for("main").is_none());
}

#[test]
fn env_overrides_apply() {
    std::env::set_var("SELECTCAT_MAX_DEPTH", "2");
    std::env::set_var("SELECTCAT_RENDER_MODE", "flat");
    std::env::set_var("SELECTCAT_TOPLEVEL_SELECTABLE", "false");
    std::env::set_var("SELECTCAT_ENABLE_SUBPAGES", "1");

    let config = with_env_overrides(Config::default());

    std::env::remove_var("SELECTCAT_MAX_DEPTH");
    std::env::remove_var("SELECTCAT_RENDER_MODE");
    std::env::remove_var("SELECTCAT_TOPLEVEL_SELECTABLE");
    std::env::remove_var("SELECTCAT_ENABLE_SUBPAGES");

    assert_eq!(config.max_depth, 2);
    assert_eq!(config.render_mode, RenderMode::Flat);
    assert!(!config.toplevel_selectable);
    assert!(config.enable_subpages);
}
