use crate::session::{CredentialStore, FileCredentialStore, MemoryCredentialStore};

use common::RedactedToken;

use tempfile::TempDir;

/// **VALUE**: Verifies a stored token survives a new store instance (a new process).
///
/// **WHY THIS MATTERS**: Auto-login on the next launch depends on the token being on disk,
/// which replaces the browser's persistent storage.
#[test]
fn given_stored_token_when_loaded_by_new_store_then_returns_same_token() {
    // GIVEN: A token written by one store
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("session.json");
    FileCredentialStore::new(&path)
        .store(&RedactedToken::new("persisted-token"))
        .expect("store succeeds");

    // WHEN: Loading through a fresh instance
    let loaded = FileCredentialStore::new(&path).load().expect("load succeeds");

    // THEN: Same token, temp file gone
    assert_eq!(loaded.expect("token present").as_str(), "persisted-token");
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn given_missing_file_when_loaded_then_returns_none() {
    let dir = TempDir::new().expect("temp dir");
    let store = FileCredentialStore::new(dir.path().join("session.json"));

    assert!(store.load().expect("load succeeds").is_none());
}

/// **VALUE**: Verifies clear removes the token and is idempotent.
///
/// **BUG THIS CATCHES**: Would catch if clearing an already-cleared store returned an error,
/// which would make a 401 during logout look like a failure.
#[test]
fn given_stored_token_when_cleared_twice_then_both_succeed_and_token_is_gone() {
    // GIVEN: A stored token
    let dir = TempDir::new().expect("temp dir");
    let store = FileCredentialStore::new(dir.path().join("session.json"));
    store.store(&RedactedToken::new("t")).expect("store succeeds");

    // WHEN: Clearing twice
    let first = store.clear();
    let second = store.clear();

    // THEN: Both Ok, nothing left
    assert!(first.is_ok());
    assert!(second.is_ok());
    assert!(store.load().expect("load succeeds").is_none());
}

#[test]
fn given_corrupt_file_when_loaded_then_returns_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").expect("write");

    let result = FileCredentialStore::new(&path).load();

    let err = result.expect_err("corrupt file must fail");
    assert!(err.to_string().contains("Credential Parse Error"));
}

#[test]
fn given_empty_token_in_file_when_loaded_then_returns_none() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"token":""}"#).expect("write");

    assert!(FileCredentialStore::new(&path).load().expect("load").is_none());
}

#[cfg(unix)]
#[test]
fn given_stored_token_when_inspected_then_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("session.json");
    FileCredentialStore::new(&path)
        .store(&RedactedToken::new("secret"))
        .expect("store succeeds");

    let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn given_memory_store_when_stored_and_cleared_then_tracks_token() {
    let store = MemoryCredentialStore::new();
    assert!(store.load().expect("load").is_none());

    store.store(&RedactedToken::new("mem")).expect("store");
    assert_eq!(store.load().expect("load").expect("token").as_str(), "mem");

    store.clear().expect("clear");
    assert!(store.load().expect("load").is_none());
}
