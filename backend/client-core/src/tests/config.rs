use crate::config::{
    API_URL_ENV_VAR, AppConfig, CONFIG_DIR_ENV_VAR, DATA_DIR_ENV_VAR, DEFAULT_API_BASE_URL,
    default_config_dir, load_dotenv_from,
};
use crate::error::config::ConfigError;
use crate::views::navigation::Page;

use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

#[test]
fn given_missing_file_when_loading_then_returns_defaults() {
    let dir = TempDir::new().expect("temp dir");

    let config = AppConfig::load(dir.path()).expect("defaults");

    assert_eq!(config.version, 1);
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.ui.start_page, Page::Dashboard);
    assert_eq!(config.ui.date_format, "%Y-%m-%d");
}

/// **VALUE**: Verifies a saved config comes back identical and leaves no temp file behind.
///
/// **WHY THIS MATTERS**: `save` writes through a temp file and renames it. A leftover temp file
/// or a lost field would mean preferences silently reset on next launch.
#[test]
fn given_saved_config_when_loading_then_round_trips() {
    // GIVEN: A customised config saved to disk
    let dir = TempDir::new().expect("temp dir");
    let mut config = AppConfig::default();
    config.api.base_url = "http://localhost:5000".to_string();
    config.api.timeout_secs = 10;
    config.session.data_dir_override = Some("/tmp/shortener-data".to_string());
    config.ui.start_page = Page::Reports;
    config.ui.date_format = "%d %b %Y".to_string();
    config.save(dir.path()).expect("save");

    // WHEN: Loading it again
    let loaded = AppConfig::load(dir.path()).expect("load");

    // THEN: Every field survives, and only config.toml remains
    assert_eq!(loaded.api.base_url, "http://localhost:5000");
    assert_eq!(loaded.api.timeout_secs, 10);
    assert_eq!(
        loaded.data_dir_override(),
        Some(PathBuf::from("/tmp/shortener-data"))
    );
    assert_eq!(loaded.ui.start_page, Page::Reports);
    assert_eq!(loaded.ui.date_format, "%d %b %Y");
    assert!(!dir.path().join("config.toml.tmp").exists());
}

#[test]
fn given_partial_file_when_loading_then_missing_fields_default() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("config.toml"),
        "[ui]\nstart_page = \"Analytics\"\n",
    )
    .expect("write");

    let config = AppConfig::load(dir.path()).expect("load");

    assert_eq!(config.ui.start_page, Page::Analytics);
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn given_corrupt_file_when_loading_then_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.toml"), "[api\nbase_url = ").expect("write");

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies each validation rule rejects its bad value.
///
/// **BUG THIS CATCHES**: Would catch a non-HTTP base URL reaching reqwest, a zero timeout that
/// makes every request fail instantly, or a strftime pattern that panics at render time.
#[test]
fn given_invalid_values_when_validating_then_validation_error() {
    // GIVEN: One broken field per case
    let cases: Vec<(&str, Box<dyn Fn(&mut AppConfig)>)> = vec![
        ("version", Box::new(|c| c.version = 0)),
        ("empty url", Box::new(|c| c.api.base_url = "  ".to_string())),
        ("scheme", Box::new(|c| c.api.base_url = "ftp://host".to_string())),
        ("timeout zero", Box::new(|c| c.api.timeout_secs = 0)),
        ("timeout high", Box::new(|c| c.api.timeout_secs = 301)),
        ("date format", Box::new(|c| c.ui.date_format = "%Q".to_string())),
    ];

    for (name, mutate) in cases {
        let mut config = AppConfig::default();
        mutate(&mut config);

        // WHEN/THEN: Validation fails with a validation error
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "case {name} should fail"
        );
    }
}

#[test]
fn given_invalid_config_when_saving_then_nothing_written() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = AppConfig::default();
    config.api.timeout_secs = 0;

    assert!(config.save(dir.path()).is_err());
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
#[serial]
fn given_env_vars_when_applying_overrides_then_they_replace_file_values() {
    // GIVEN: Overrides in the process environment
    unsafe {
        std::env::set_var(API_URL_ENV_VAR, "http://127.0.0.1:8080");
        std::env::set_var(DATA_DIR_ENV_VAR, "/tmp/env-data");
    }
    let mut config = AppConfig::default();

    // WHEN: Applying them
    let result = config.apply_env_overrides();

    unsafe {
        std::env::remove_var(API_URL_ENV_VAR);
        std::env::remove_var(DATA_DIR_ENV_VAR);
    }

    // THEN: Both are taken and reported
    assert_eq!(
        result.expect("overrides valid"),
        vec![API_URL_ENV_VAR, DATA_DIR_ENV_VAR]
    );
    assert_eq!(config.api.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.data_dir_override(), Some(PathBuf::from("/tmp/env-data")));
}

#[test]
#[serial]
fn given_invalid_env_url_when_applying_overrides_then_rejected() {
    unsafe { std::env::set_var(API_URL_ENV_VAR, "not-a-url") };
    let mut config = AppConfig::default();

    let result = config.apply_env_overrides();

    unsafe { std::env::remove_var(API_URL_ENV_VAR) };
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
#[serial]
fn given_no_env_vars_when_applying_overrides_then_nothing_reported() {
    unsafe {
        std::env::remove_var(API_URL_ENV_VAR);
        std::env::remove_var(DATA_DIR_ENV_VAR);
    }
    let mut config = AppConfig::default();

    let applied = config.apply_env_overrides().expect("defaults valid");

    assert!(applied.is_empty());
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
}

/// **VALUE**: Verifies a config directory set in `.env` is seen by `default_config_dir`.
///
/// **BUG THIS CATCHES**: Would catch loading `.env` only after the config directory was
/// resolved, which silently ignores `SHORTENER_CONFIG_DIR` from the file.
#[test]
#[serial]
fn given_dotenv_with_config_dir_when_loaded_then_default_config_dir_uses_it() {
    // GIVEN: A .env naming a config directory, and no such variable in the process
    let dir = TempDir::new().expect("temp dir");
    let wanted = dir.path().join("from-dotenv");
    std::fs::write(
        dir.path().join(".env"),
        format!("{CONFIG_DIR_ENV_VAR}={}\n", wanted.display()),
    )
    .expect("write .env");
    unsafe { std::env::remove_var(CONFIG_DIR_ENV_VAR) };

    // WHEN: Loading it before resolving the config directory
    let loaded = load_dotenv_from(dir.path());
    let config_dir = default_config_dir();

    unsafe { std::env::remove_var(CONFIG_DIR_ENV_VAR) };

    // THEN: The .env value wins over the platform directory
    assert_eq!(loaded, Some(dir.path().join(".env")));
    assert_eq!(config_dir.expect("config dir"), wanted);
}

#[test]
fn given_dir_without_dotenv_when_loading_then_none() {
    let dir = TempDir::new().expect("temp dir");

    assert_eq!(load_dotenv_from(dir.path()), None);
}
