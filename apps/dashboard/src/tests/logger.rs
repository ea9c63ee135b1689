// Unit tests for logger module initialization logic

use crate::logger::{LOG_FILE_NAME, initialize};

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Initialization can be reached from more than one path (tests, CLI
/// startup). A second call must not crash the app.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed, causing fern
/// to fail when trying to set a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::TempDir::new().expect("temp dir");

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path(), false);
    let result2 = initialize(temp_dir.path(), true);

    // THEN: Both return Ok and the first call created the log file
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}
