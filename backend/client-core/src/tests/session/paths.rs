use crate::session::paths::{DATA_DIR_ENV_VAR, PathSource, detect_data_paths};

use std::path::Path;

use serial_test::serial;

#[test]
#[serial]
fn given_config_override_when_detecting_then_override_wins_over_env() {
    // GIVEN: Both an explicit override and the env var
    unsafe { std::env::set_var(DATA_DIR_ENV_VAR, "/tmp/from-env") };

    // WHEN: Detecting with an override
    let paths = detect_data_paths(Some(Path::new("/tmp/from-config"))).expect("paths");

    // THEN: The override is used and files are rooted under it
    assert_eq!(paths.source, PathSource::ConfigOverride);
    assert_eq!(paths.credential_file, Path::new("/tmp/from-config/session.json"));
    assert_eq!(paths.log_dir, Path::new("/tmp/from-config/logs"));

    unsafe { std::env::remove_var(DATA_DIR_ENV_VAR) };
}

#[test]
#[serial]
fn given_env_var_when_detecting_without_override_then_uses_env_dir() {
    unsafe { std::env::set_var(DATA_DIR_ENV_VAR, "/tmp/from-env") };

    let paths = detect_data_paths(None).expect("paths");

    assert_eq!(paths.source, PathSource::EnvVar);
    assert_eq!(paths.data_dir, Path::new("/tmp/from-env"));

    unsafe { std::env::remove_var(DATA_DIR_ENV_VAR) };
}

#[test]
#[serial]
fn given_no_override_when_detecting_then_ends_with_app_dir() {
    unsafe { std::env::remove_var(DATA_DIR_ENV_VAR) };

    let paths = detect_data_paths(None).expect("paths");

    assert_ne!(paths.source, PathSource::EnvVar);
    assert!(paths.credential_file.ends_with("session.json"));
}
