use dashboard::cli::AnalyticsScope;
use dashboard::commands::{analytics, auth, links};
use dashboard::error::DashboardError;

use crate::helpers::{TOKEN, context_for, mount_profile};

use client_core::session::CredentialStore;
use client_core::views::ChartPoint;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for the command layer + AppState against a mocked backend
// ============================================================================

/// **VALUE**: Tests that `login` stores the token and records the session in AppState.
///
/// **WHY THIS MATTERS**: This is the closest we get to an end-to-end sign-in without a
/// browser: callback parsing, token storage, profile fetch and state update in one call.
///
/// **BUG THIS CATCHES**: Would catch if the command returns the session without publishing it
/// to AppState, leaving the TUI title bar signed out.
#[tokio::test]
async fn given_callback_when_login_command_runs_then_state_has_session() {
    // GIVEN: A backend recognising the token
    let server = MockServer::start().await;
    mount_profile(&server).await;
    let (ctx, store) = context_for(&server, None);

    // WHEN: Logging in with the redirect URL
    let session = auth::login(
        &ctx,
        Some(format!("http://localhost:3000/?token={}", TOKEN)),
    )
    .await
    .expect("login succeeds");

    // THEN: Token stored, session returned and published
    assert_eq!(session.user.greeting_name(), "Grace Hopper");
    assert!(store.load().expect("load").is_some());

    assert_eq!(ctx.state.get_session().await, Some(session));
}

#[tokio::test]
async fn given_callback_without_token_when_login_command_runs_then_not_logged_in() {
    let server = MockServer::start().await;
    let (ctx, _) = context_for(&server, None);

    let result = auth::login(&ctx, Some("http://localhost:3000/?error=denied".to_string())).await;

    assert!(matches!(result, Err(DashboardError::NotLoggedIn { .. })));
}

/// **VALUE**: Verifies CLI commands report a rejected token instead of printing an empty list.
///
/// **WHY THIS MATTERS**: Unlike the TUI, a command line has no empty view to fall back to; the
/// user needs to know to log in again.
#[tokio::test]
async fn given_rejected_token_when_listing_then_not_logged_in_error() {
    // GIVEN: A backend rejecting the token
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let (ctx, _) = context_for(&server, Some(TOKEN));

    // WHEN: Listing
    let result = links::list(&ctx).await;

    // THEN: NotLoggedIn
    assert!(matches!(result, Err(DashboardError::NotLoggedIn { .. })));
}

#[tokio::test]
async fn given_whoami_with_expired_token_when_run_then_token_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/getUser"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let (ctx, store) = context_for(&server, Some(TOKEN));

    let result = auth::whoami(&ctx).await;

    assert!(matches!(result, Err(DashboardError::NotLoggedIn { .. })));
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn given_blank_url_when_shortening_then_core_error_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let (ctx, _) = context_for(&server, Some(TOKEN));

    let result = links::shorten(&ctx, "   ", None, None).await;

    assert!(matches!(result, Err(DashboardError::Core { .. })));
}

#[tokio::test]
async fn given_alias_scope_when_fetching_analytics_then_view_built_from_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/promo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalClicks": 12,
            "uniqueUsers": 5,
            "clicksByDate": [{ "date": "2025-02-01", "clickCount": 12 }]
        })))
        .mount(&server)
        .await;
    let (ctx, _) = context_for(&server, Some(TOKEN));

    let view = analytics::summary(
        &ctx,
        &AnalyticsScope::Alias {
            alias: "promo".to_string(),
        },
    )
    .await
    .expect("analytics");

    assert_eq!(view.summary().total_clicks, 12);
    assert_eq!(
        view.clicks_over_time(ctx.date_format()),
        vec![ChartPoint::new("2025-02-01", 12)]
    );
}

/// **VALUE**: Verifies `report --topic` charts the topic's buckets, not the URL distribution.
///
/// **BUG THIS CATCHES**: Would catch attaching the fetched analytics to the wrong selection,
/// which would make the chart fall back to one bar per URL.
#[tokio::test]
async fn given_topic_when_reporting_then_chart_uses_topic_analytics() {
    // GIVEN: URL list and topic analytics
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "_id": "1", "shortUrl": "https://sho.rt/a", "topic": "news", "totalClicks": 3 },
                { "_id": "2", "shortUrl": "https://sho.rt/b", "topic": "tech", "totalClicks": 1 }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/topic"))
        .and(query_param("topic", "news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clicksByDate": [{ "date": "2025-02-03", "clickCount": 3 }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (ctx, _) = context_for(&server, Some(TOKEN));

    // WHEN: Reporting on a topic
    let view = analytics::report(&ctx, Some("news".to_string()), None)
        .await
        .expect("report");

    // THEN: Topic series and title
    assert_eq!(view.title(), "Data for Topic: news");
    assert_eq!(view.topics(), ["news", "tech"]);
    assert_eq!(
        view.chart_data(ctx.date_format()),
        vec![ChartPoint::new("2025-02-03", 3)]
    );
}

#[tokio::test]
async fn given_signed_in_when_logout_command_runs_then_token_and_state_cleared() {
    // GIVEN: A session recorded by whoami
    let server = MockServer::start().await;
    mount_profile(&server).await;
    let (ctx, store) = context_for(&server, Some(TOKEN));
    auth::whoami(&ctx).await.expect("whoami");
    assert!(ctx.state.is_signed_in().await);

    // WHEN: Logging out
    auth::logout(&ctx).await.expect("logout");

    // THEN: Nothing stored, nobody signed in
    assert!(store.load().expect("load").is_none());
    assert!(!ctx.state.is_signed_in().await);
}
