//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use glitter::config::AppConfig;
use glitter::SceneKind;
use serial_test::serial;

fn scratch_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("glitter-config-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("GLITTER_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("GLITTER_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_selects_scene() {
    std::env::set_var("GLITTER_SCENE__KIND", "hello_triangle");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.scene.kind, SceneKind::HelloTriangle);
    std::env::remove_var("GLITTER_SCENE__KIND");
}

#[test]
#[serial]
fn test_repository_defaults_load() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.window.height, 800);
    assert_eq!(config.rendering.clear_color, [0.2, 0.3, 0.3, 1.0]);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = scratch_config_dir("layering");
    fs::write(
        dir.join("default.toml"),
        "[window]\ntitle = \"Default\"\nwidth = 640\n\n[rendering]\nwireframe = false\n",
    )
    .unwrap();
    fs::write(dir.join("user.toml"), "[rendering]\nwireframe = true\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "Default");
    assert_eq!(config.window.width, 640);
    assert!(config.rendering.wireframe);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = std::env::temp_dir().join("glitter-config-does-not-exist");
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "Glitter");
    assert_eq!(config.scene.kind, SceneKind::TwoTriangles);
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    let dir = scratch_config_dir("invalid");
    fs::write(dir.join("default.toml"), "[scene]\nkind = \"three_triangles\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));

    fs::remove_dir_all(&dir).unwrap();
}
