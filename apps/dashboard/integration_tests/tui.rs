use crate::helpers::{TOKEN, context_for, context_with_start_page, mount_profile, url_json};

use dashboard::tui::app::App;

use client_core::session::CredentialStore;
use client_core::views::{Page, Route};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// TUI application state against a mocked backend (no terminal involved)
// ============================================================================

async fn mount_two_then_one_url(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [url_json("id-1", "a"), url_json("id-2", "b")]
        })))
        .up_to_n_times(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [url_json("id-1", "a")]
        })))
        .mount(server)
        .await;
}

async fn mount_two_urls(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [url_json("id-1", "a"), url_json("id-2", "b")]
        })))
        .mount(server)
        .await;
}

// ----------------------------------------------------------------------------
// Start path and session guard
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies `tui --path /analytics` without a session lands on the sign-in screen.
///
/// **WHY THIS MATTERS**: Dashboard routes show user data; opening one signed out must not
/// render an empty analytics page.
///
/// **BUG THIS CATCHES**: Would catch assigning the requested route directly instead of running
/// it through the session guard.
#[tokio::test]
async fn given_no_session_when_starting_on_analytics_path_then_lands_home() {
    // GIVEN: No stored token
    let server = MockServer::start().await;
    let (ctx, _) = context_for(&server, None);

    // WHEN: Starting on /analytics
    let app = App::new(&ctx, Some("/analytics")).await;

    // THEN: Sent to the sign-in screen
    assert_eq!(app.route, Route::Home);
    assert!(!app.is_signed_in().await);
}

#[tokio::test]
async fn given_unknown_path_when_starting_then_not_found() {
    let server = MockServer::start().await;
    let (ctx, _) = context_for(&server, None);

    let app = App::new(&ctx, Some("/no/such/page")).await;

    assert_eq!(app.route, Route::NotFound);
}

#[tokio::test]
async fn given_stored_token_when_starting_on_analytics_path_then_analytics_page() {
    // GIVEN: A token the backend accepts
    let server = MockServer::start().await;
    mount_profile(&server).await;
    let (ctx, _) = context_for(&server, Some(TOKEN));

    // WHEN: Starting on /analytics
    let app = App::new(&ctx, Some("/analytics")).await;

    // THEN: Session restored into the shared state, analytics page open
    assert_eq!(app.route, Route::Analytics);
    assert_eq!(app.page, Page::Analytics);
    let session = app.session().await.expect("restored session");
    assert_eq!(session.user.greeting_name(), "Grace Hopper");
}

// ----------------------------------------------------------------------------
// Login / logout
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies a TUI login opens the configured start page.
///
/// **WHY THIS MATTERS**: `ui.start_page` is the user's chosen landing page; ignoring it after
/// sign-in would always drop them on the link table.
///
/// **BUG THIS CATCHES**: Would catch navigating to the route's default page instead of the
/// configured one, or navigating before the session is recorded (which bounces back home).
#[tokio::test]
async fn given_login_input_when_logging_in_then_lands_on_configured_start_page() {
    // GIVEN: Reports configured as start page, signed out
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_two_urls(&server).await;
    let (ctx, store) = context_with_start_page(&server, None, Page::Reports);
    let mut app = App::new(&ctx, None).await;
    assert_eq!(app.route, Route::Home);

    // WHEN: Pasting the redirect URL and pressing Enter
    app.login_input = format!("http://localhost:3000/?token={TOKEN}");
    app.login().await;

    // THEN: Signed in on the Reports page with its data loaded
    assert_eq!(app.route, Route::Dashboard);
    assert_eq!(app.page, Page::Reports);
    assert_eq!(app.reports.urls().len(), 2);
    assert_eq!(app.status_message, "Welcome, Grace Hopper!");
    assert!(app.login_input.is_empty());
    assert!(ctx.state.is_signed_in().await);
    assert!(store.load().expect("load").is_some());
}

#[tokio::test]
async fn given_input_without_token_when_logging_in_then_stays_home_with_error() {
    let server = MockServer::start().await;
    let (ctx, _) = context_for(&server, None);
    let mut app = App::new(&ctx, None).await;

    app.login_input = "http://localhost:3000/?error=denied".to_string();
    app.login().await;

    assert_eq!(app.route, Route::Home);
    assert_eq!(app.error_message, "Login failed: no valid token found");
    assert!(!ctx.state.is_signed_in().await);
}

/// **VALUE**: Verifies logout clears the token, the shared session and every page's data.
///
/// **BUG THIS CATCHES**: Would catch leaving the previous user's links in the table after
/// signing out, where the next user would briefly see them.
#[tokio::test]
async fn given_signed_in_with_rows_when_logging_out_then_views_reset_and_home() {
    // GIVEN: A signed-in app showing two rows
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_two_urls(&server).await;
    let (ctx, store) = context_for(&server, Some(TOKEN));
    let mut app = App::new(&ctx, None).await;
    assert_eq!(app.overview.total(), 2);
    assert_eq!(app.table_state.selected(), Some(0));

    // WHEN: Logging out
    app.logout().await;

    // THEN: Everything is back to signed-out defaults
    assert_eq!(app.route, Route::Home);
    assert!(!app.is_signed_in().await);
    assert!(store.load().expect("load").is_none());
    assert_eq!(app.overview.total(), 0);
    assert!(app.reports.urls().is_empty());
    assert_eq!(app.table_state.selected(), None);
    assert_eq!(app.status_message, "Logged out");
}

// ----------------------------------------------------------------------------
// Delete confirmation
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the delete flow: ask, confirm with `y`, refresh, clamp the selection.
///
/// **WHY THIS MATTERS**: Deleting the last row must not leave the selection pointing past the
/// end of the table, where the next `d` would do nothing.
///
/// **BUG THIS CATCHES**: Would catch deleting without confirmation, deleting by the wrong id,
/// or skipping the selection clamp after the refresh.
#[tokio::test]
async fn given_last_row_selected_when_delete_confirmed_then_removed_and_selection_clamped() {
    // GIVEN: Two rows, the second selected
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_two_then_one_url(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/api/url/id-2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let (ctx, _) = context_for(&server, Some(TOKEN));
    let mut app = App::new(&ctx, None).await;
    app.move_selection_down();
    assert_eq!(app.table_state.selected(), Some(1));

    // WHEN: Requesting then confirming
    app.request_delete();
    assert_eq!(app.pending_delete.as_deref(), Some("id-2"));
    assert!(app.status_message.starts_with("Delete https://sho.rt/b?"));
    app.confirm_delete().await;

    // THEN: One row left, selection on it
    assert_eq!(app.pending_delete, None);
    assert_eq!(app.overview.total(), 1);
    assert_eq!(app.table_state.selected(), Some(0));
    assert_eq!(app.status_message, "Short URL deleted");
    assert!(app.overview.last_update().is_some());
}

#[tokio::test]
async fn given_pending_delete_when_cancelled_then_nothing_sent() {
    // GIVEN: A delete awaiting confirmation
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_two_urls(&server).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (ctx, _) = context_for(&server, Some(TOKEN));
    let mut app = App::new(&ctx, None).await;
    app.request_delete();
    assert_eq!(app.pending_delete.as_deref(), Some("id-1"));

    // WHEN: Any key but y
    app.cancel_delete();

    // THEN: Rows untouched
    assert_eq!(app.pending_delete, None);
    assert_eq!(app.overview.total(), 2);
    assert_eq!(app.status_message, "Delete cancelled");
}

#[tokio::test]
async fn given_rejected_delete_when_confirmed_then_error_and_rows_kept() {
    let server = MockServer::start().await;
    mount_profile(&server).await;
    mount_two_urls(&server).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let (ctx, _) = context_for(&server, Some(TOKEN));
    let mut app = App::new(&ctx, None).await;

    app.request_delete();
    app.confirm_delete().await;

    assert_eq!(app.overview.total(), 2);
    assert_eq!(app.error_message, "Failed to delete short URL");
}

// ----------------------------------------------------------------------------
// Clipboard
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the short URL is still shown when no clipboard is available.
///
/// **WHY THIS MATTERS**: Over SSH or in a bare console there is no clipboard; the user must
/// still be able to get at the URL.
#[tokio::test]
async fn given_no_clipboard_when_copying_then_url_shown_in_error_line() {
    // GIVEN: A signed-out app (no backend calls needed)
    let server = MockServer::start().await;
    let (ctx, _) = context_for(&server, None);
    let mut app = App::new(&ctx, None).await;

    // WHEN: The clipboard is not supported
    app.report_copy(
        "https://sho.rt/a",
        Err(arboard::Error::ClipboardNotSupported),
    );

    // THEN: The URL is in the error line
    assert_eq!(
        app.error_message,
        "Clipboard unavailable, short URL: https://sho.rt/a"
    );
    assert!(app.status_message.is_empty());

    // WHEN: A later copy succeeds
    app.report_copy("https://sho.rt/a", Ok(()));

    // THEN: Status replaces the error
    assert_eq!(app.status_message, "Copied: https://sho.rt/a");
    assert!(app.error_message.is_empty());
}
