//! Tests for site configuration

use std::fs;

use quire::config::{ConfigError, ContentConfig, SiteConfig};
use tempfile::TempDir;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = SiteConfig::load(temp.path()).unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.content.posts_dir, "_posts");
    assert_eq!(config.content.drafts_dir, "_drafts");
    assert!(config.content.include_drafts);
}

#[test]
fn test_load_custom_directories() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("quire.toml"),
        r#"
[content]
posts_dir = "content/posts"
drafts_dir = "content/drafts"
extensions = ["md"]
include_drafts = false
"#,
    )
    .unwrap();

    let config = SiteConfig::load(temp.path()).unwrap();
    assert_eq!(
        config.content,
        ContentConfig {
            posts_dir: "content/posts".to_string(),
            drafts_dir: "content/drafts".to_string(),
            extensions: vec!["md".to_string()],
            include_drafts: false,
        }
    );
}

#[test]
fn test_empty_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("quire.toml"), "# nothing configured\n").unwrap();
    assert_eq!(SiteConfig::load(temp.path()).unwrap(), SiteConfig::default());
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("quire.toml"), "[content]\ninclude_drafts = \"maybe\"\n").unwrap();

    let err = SiteConfig::load(temp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("quire.toml"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = SiteConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    assert!(text.contains("posts_dir"));
    let back: SiteConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}
