use crate::state::{AppState, StateCommand};

use client_core::session::Session;
use models::UserProfile;

fn session_for(name: &str) -> Session {
    Session {
        user: UserProfile {
            display_name: Some(name.to_string()),
            ..UserProfile::default()
        },
    }
}

/// **VALUE**: Verifies an update is visible as soon as `update` returns.
///
/// **WHY THIS MATTERS**: The TUI navigates right after login and asks the state whether
/// someone is signed in. A queued-but-unapplied session would bounce the user back to Home.
///
/// **BUG THIS CATCHES**: Would catch `update` returning once the command is queued rather than
/// once the actor applied it.
#[tokio::test]
async fn given_update_returned_when_reading_then_session_is_visible() {
    // GIVEN: Fresh state
    let state = AppState::new();
    assert!(!state.is_signed_in().await);

    // WHEN: Setting a session
    state
        .update(StateCommand::SetSession(session_for("Ada")))
        .await
        .expect("update");

    // THEN: Immediately readable, no polling
    assert!(state.is_signed_in().await);
    assert_eq!(state.get_session().await, Some(session_for("Ada")));
}

/// **VALUE**: Verifies set then clear through the actor leaves the session empty.
///
/// **WHY THIS MATTERS**: Logout must actually drop the cached profile, otherwise the title bar
/// keeps greeting a user who signed out.
#[tokio::test]
async fn given_session_set_when_cleared_then_no_session() {
    // GIVEN: A signed-in state
    let state = AppState::new();
    state
        .update(StateCommand::SetSession(session_for("Ada")))
        .await
        .expect("update");

    // WHEN: Clearing
    state
        .update(StateCommand::ClearSession)
        .await
        .expect("update");

    // THEN: Empty
    assert!(!state.is_signed_in().await);
    assert_eq!(state.get_session().await, None);
}

#[tokio::test]
async fn given_no_session_when_cleared_then_still_empty() {
    let state = AppState::default();

    state
        .update(StateCommand::ClearSession)
        .await
        .expect("clearing an empty state is fine");

    assert!(!state.is_signed_in().await);
}

/// **VALUE**: Verifies commands apply in the order they were sent.
///
/// **BUG THIS CATCHES**: Would catch replacing the single actor with ad-hoc spawned writes,
/// where a late SetSession could overwrite a newer one.
#[tokio::test]
async fn given_two_sessions_when_set_in_order_then_last_wins() {
    // GIVEN: Fresh state
    let state = AppState::default();

    // WHEN: Two sessions are set back to back
    state
        .update(StateCommand::SetSession(session_for("First")))
        .await
        .expect("update");
    state
        .update(StateCommand::SetSession(session_for("Second")))
        .await
        .expect("update");

    // THEN: The second is current
    let current = state.get_session().await.expect("signed in");
    assert_eq!(current.user.greeting_name(), "Second");
}

#[tokio::test]
async fn given_clones_when_one_updates_then_all_observe() {
    let state = AppState::new();
    let clone = state.clone();

    clone
        .update(StateCommand::SetSession(session_for("Shared")))
        .await
        .expect("update");

    assert!(state.is_signed_in().await);
}
