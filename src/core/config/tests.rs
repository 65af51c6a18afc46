use super::data::{path_display, Config, CustomTheme};
use super::io::ConfigError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        theme: Some("dark".to_string()),
        reply_delay_ms: Some(1500),
        primary_name: Some("Ada".to_string()),
        ..Default::default()
    };
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let mut modified = loaded;
    modified.theme = None;
    modified.title = Some("Lobby".to_string());
    modified
        .save_to_path(&config_path)
        .expect("Failed to save modified config");
    let reloaded = Config::load_from_path(&config_path).expect("Failed to reload config");
    assert_eq!(reloaded.theme, None);
    assert_eq!(reloaded.title.as_deref(), Some("Lobby"));
    assert_eq!(reloaded.reply_delay_ms, Some(1500));
}

#[test]
fn custom_themes_parse_from_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r##"
theme = "ocean"

[[custom_themes]]
id = "ocean"
display_name = "Ocean"
primary_bubble = "#1565c0"
secondary_bubble = "teal"
"##,
    )
    .expect("write config");

    let config = Config::load_from_path(&config_path).expect("load");
    let theme: &CustomTheme = config.get_custom_theme("OCEAN").expect("custom theme");
    assert_eq!(theme.display_name, "Ocean");
    assert_eq!(theme.primary_bubble.as_deref(), Some("#1565c0"));
    assert_eq!(theme.background, None);
    assert_eq!(config.list_custom_themes().len(), 1);
}

#[test]
fn invalid_toml_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "reply_delay_ms = \"soon\"").expect("write config");

    let err = Config::load_from_path(&config_path).expect_err("should fail to parse");
    let config_err = err
        .downcast_ref::<ConfigError>()
        .expect("error should be a ConfigError");
    assert!(matches!(config_err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[cfg(unix)]
#[test]
fn path_display_abbreviates_home() {
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let path = PathBuf::from(home).join(".config").join("parley");
    assert_eq!(path_display(&path), "~/.config/parley");
}
