use crate::helpers::{TEST_TOKEN, client_for};

use client_core::session::SessionManager;
use client_core::session::store::CredentialStore;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// SessionManager: login, restore and logout against a mocked backend
// ============================================================================

async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/getUser"))
        .and(header("Authorization", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u-1",
            "displayName": "Ada Lovelace",
            "email": "ada@example.com"
        })))
        .mount(server)
        .await;
}

/// **VALUE**: Verifies the full sign-in flow from a pasted callback URL.
///
/// **WHY THIS MATTERS**: This is the only way into the dashboard. The token must be extracted,
/// persisted, and immediately used to load the profile.
///
/// **BUG THIS CATCHES**: Would catch fetching the profile before storing the token, which sends
/// the request with no `Authorization` header.
#[tokio::test]
async fn given_callback_url_when_logging_in_then_token_stored_and_session_returned() {
    // GIVEN: A backend that recognises the token
    let server = MockServer::start().await;
    mount_profile(&server).await;
    let (client, store) = client_for(&server, None);
    let manager = SessionManager::new(client);

    // WHEN: Completing login with the redirect URL
    let session = manager
        .login_with_callback(&format!("http://localhost:3000/dashboard?token={TEST_TOKEN}"))
        .await
        .expect("store works");

    // THEN: Session carries the profile, store carries the token
    let session = session.expect("signed in");
    assert_eq!(session.user.display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(
        store.load().expect("load").map(|t| t.as_str().to_string()),
        Some(TEST_TOKEN.to_string())
    );
}

#[tokio::test]
async fn given_input_without_token_when_logging_in_then_no_session_and_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (client, store) = client_for(&server, None);
    let manager = SessionManager::new(client);

    let session = manager
        .login_with_callback("http://localhost:3000/dashboard?code=abc")
        .await
        .expect("no store error");

    assert!(session.is_none());
    assert!(store.load().expect("load").is_none());
}

/// **VALUE**: Verifies a token the backend rejects does not leave a half-signed-in state.
///
/// **BUG THIS CATCHES**: Would catch keeping a rejected token, which would make every later
/// launch try (and fail) to restore it.
#[tokio::test]
async fn given_rejected_token_when_logging_in_then_no_session_and_token_cleared() {
    // GIVEN: A backend that rejects everything
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/getUser"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let (client, store) = client_for(&server, None);
    let manager = SessionManager::new(client);

    // WHEN: Logging in with a bare token
    let session = manager
        .login_with_callback("expired-token")
        .await
        .expect("no store error");

    // THEN: No session and nothing stored
    assert!(session.is_none());
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn given_stored_token_when_restoring_then_session_returned() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let manager = SessionManager::new(client);

    let session = manager.restore().await.expect("restored");

    assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn given_empty_store_when_restoring_then_no_request_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, None);
    let manager = SessionManager::new(client);

    assert!(manager.restore().await.is_none());
}

#[tokio::test]
async fn given_signed_in_when_logging_out_then_token_removed() {
    let server = MockServer::start().await;
    let (client, store) = client_for(&server, Some(TEST_TOKEN));
    let manager = SessionManager::new(client);

    manager.logout().expect("logout");
    manager.logout().expect("second logout is a no-op");

    assert!(store.load().expect("load").is_none());
}
