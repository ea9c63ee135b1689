use crate::helpers::{TEST_TOKEN, client_for, summary_json, url_json};

use client_core::error::ShortenerClientError;
use client_core::session::store::CredentialStore;
use models::ShortenRequestBuilder;

use common::HttpStatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for ShortenerClient against a mocked backend
// ============================================================================

/// **VALUE**: Verifies the stored token is sent verbatim in `Authorization`.
///
/// **WHY THIS MATTERS**: The backend reads the header value as the token itself. A `Bearer `
/// prefix would make every authenticated call fail with 401.
///
/// **BUG THIS CATCHES**: Would catch a switch to `bearer_auth()` or any header rewriting.
#[tokio::test]
async fn given_stored_token_when_listing_urls_then_sends_raw_authorization_header() {
    // GIVEN: A backend that only answers the raw token
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .and(header("Authorization", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [url_json("id-1", "promo", "marketing", 4)]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    // WHEN: Listing URLs
    let urls = client.list_urls().await.expect("list succeeds");

    // THEN: The envelope is unwrapped
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].record_id(), Some("id-1"));
    assert_eq!(urls[0].total_clicks, Some(4));
}

/// **VALUE**: Verifies no request leaves the client when no token is stored.
///
/// **WHY THIS MATTERS**: Sending an empty `Authorization` header leaks a pointless request and
/// returns a confusing 401 instead of "log in first".
#[tokio::test]
async fn given_no_token_when_calling_api_then_fails_without_request() {
    // GIVEN: An empty store and a backend that must not be hit
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, None);

    // WHEN: Calling an authenticated endpoint
    let result = client.overall_analytics().await;

    // THEN: MissingToken
    assert!(matches!(
        result,
        Err(ShortenerClientError::MissingToken { .. })
    ));
}

/// **VALUE**: Verifies a 401 on the profile endpoint clears the stored token.
///
/// **WHY THIS MATTERS**: An expired token would otherwise be replayed on every launch and the
/// user would be stuck on a broken dashboard.
///
/// **BUG THIS CATCHES**: Would catch if the clear-on-401 branch were dropped or applied to the
/// wrong error.
#[tokio::test]
async fn given_rejected_token_when_getting_user_then_token_is_cleared() {
    // GIVEN: A backend rejecting the token
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/getUser"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;
    let (client, store) = client_for(&server, Some(TEST_TOKEN));

    // WHEN: Fetching the profile
    let result = client.get_user().await;

    // THEN: Unauthorized, and the store is empty
    let err = result.expect_err("401 must fail");
    assert!(matches!(err, ShortenerClientError::Unauthorized { .. }));
    assert_eq!(err.status(), Some(HttpStatusCode(401)));
    assert!(store.load().expect("load").is_none());
}

#[tokio::test]
async fn given_rejected_token_when_listing_urls_then_token_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let (client, store) = client_for(&server, Some(TEST_TOKEN));

    let result = client.list_urls().await;

    assert!(matches!(
        result,
        Err(ShortenerClientError::Unauthorized { .. })
    ));
    assert!(store.load().expect("load").is_some());
}

#[tokio::test]
async fn given_profile_when_getting_user_then_decodes_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/getUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u-1",
            "displayName": "Ada Lovelace",
            "email": "ada@example.com",
            "createdAt": "2024-12-10T08:30:00.000Z"
        })))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    let user = client.get_user().await.expect("profile");

    assert_eq!(user.id.as_deref(), Some("u-1"));
    assert_eq!(user.display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(user.picture, None);
}

/// **VALUE**: Verifies the create body uses the backend's camelCase keys and sends blank
/// optionals as empty strings.
///
/// **BUG THIS CATCHES**: Would catch a serde rename regression (`long_url` on the wire) that
/// makes the backend reject every link.
#[tokio::test]
async fn given_shorten_request_when_creating_then_posts_camel_case_body() {
    // GIVEN: A backend expecting the exact body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .and(header("Authorization", TEST_TOKEN))
        .and(body_json(json!({
            "longUrl": "https://example.com/very/long",
            "customAlias": "",
            "topic": "news"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "shortUrl": "https://sho.rt/x1",
            "createdAt": "2025-02-01T10:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let request = ShortenRequestBuilder::default()
        .with_long_url(" https://example.com/very/long ")
        .with_topic("news")
        .build()
        .expect("valid request");

    // WHEN: Creating
    let created = client.create_url(&request).await.expect("created");

    // THEN: The short URL comes back
    assert_eq!(created.short_url.as_deref(), Some("https://sho.rt/x1"));
}

#[tokio::test]
async fn given_record_id_when_deleting_then_hits_url_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/url/65b2f0c1e4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    client.delete_url("65b2f0c1e4").await.expect("deleted");
}

/// **VALUE**: Verifies topic analytics passes the topic as an encoded query parameter.
///
/// **BUG THIS CATCHES**: Would catch string-concatenating the topic into the URL, which
/// breaks topics containing spaces or `&`.
#[tokio::test]
async fn given_topic_with_spaces_when_fetching_analytics_then_query_is_encoded() {
    // GIVEN: A backend matching the decoded query value
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/topic"))
        .and(query_param("topic", "tech & news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_json()))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    // WHEN: Fetching
    let summary = client
        .topic_analytics("tech & news")
        .await
        .expect("analytics");

    // THEN: Decoded
    assert_eq!(summary.total_clicks, 9);
    assert_eq!(summary.clicks_by_date.len(), 2);
}

#[tokio::test]
async fn given_alias_when_fetching_analytics_then_alias_is_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/promo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_json()))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    let summary = client.alias_analytics("promo").await.expect("analytics");

    assert_eq!(summary.device_type[0].device_name, "desktop");
}

#[tokio::test]
async fn given_alias_when_resolving_then_returns_long_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shorten/promo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "longUrl": "https://example.com/promo" })),
        )
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    let long_url = client.resolve_alias("promo").await.expect("resolved");

    assert_eq!(long_url, "https://example.com/promo");
}

#[tokio::test]
async fn given_body_without_long_url_when_resolving_then_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/shorten/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    let result = client.resolve_alias("ghost").await;

    assert!(matches!(
        result,
        Err(ShortenerClientError::InvalidResponse { .. })
    ));
}

/// **VALUE**: Verifies non-2xx responses keep their status code and body text.
///
/// **WHY THIS MATTERS**: The CLI shows the backend's message (e.g. "Alias already taken"); losing
/// it leaves the user guessing.
#[tokio::test]
async fn given_server_error_when_creating_then_status_and_body_preserved() {
    // GIVEN: A conflict response
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Alias already taken"))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let request = ShortenRequestBuilder::default()
        .with_long_url("https://example.com")
        .with_custom_alias("taken")
        .build()
        .expect("valid request");

    // WHEN: Creating
    let err = client.create_url(&request).await.expect_err("conflict");

    // THEN: Server error with status and message
    match err {
        ShortenerClientError::Server {
            status, message, ..
        } => {
            assert_eq!(status, HttpStatusCode(409));
            assert!(status.is_client_error());
            assert_eq!(message, "Alias already taken");
        }
        other => panic!("Expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_malformed_json_when_listing_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    let result = client.list_urls().await;

    assert!(matches!(result, Err(ShortenerClientError::Json { .. })));
}

#[tokio::test]
async fn given_server_uri_when_building_login_url_then_points_at_google_auth() {
    let server = MockServer::start().await;
    let (client, _) = client_for(&server, None);

    let login_url = client.login_url().expect("login url");

    assert_eq!(login_url.path(), "/api/auth/google");
    assert!(login_url.as_str().starts_with(&server.uri()));
}

/// **VALUE**: Verifies server errors record the endpoint method that hit them.
///
/// **WHY THIS MATTERS**: The location is the only hint in `dashboard.log` about which call
/// failed; if every error points at the shared send helper, the line is useless.
///
/// **BUG THIS CATCHES**: Would catch capturing `Location::caller()` inside a helper without
/// `#[track_caller]`, which gives every server error the same line.
#[tokio::test]
async fn given_500_on_two_endpoints_when_failing_then_locations_differ() {
    // GIVEN: A backend failing every call
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));

    // WHEN: Two different endpoints fail
    let list_err = client.list_urls().await.expect_err("list fails");
    let delete_err = client.delete_url("id-1").await.expect_err("delete fails");

    // THEN: Both are Server errors located in the client, on different lines
    let location_of = |err: ShortenerClientError| match err {
        ShortenerClientError::Server {
            status, location, ..
        } => {
            assert!(status.is_server_error());
            location
        }
        other => panic!("Expected Server error, got {other:?}"),
    };
    let list_location = location_of(list_err);
    let delete_location = location_of(delete_err);

    assert!(list_location.file.ends_with("mod.rs"));
    assert_eq!(list_location.file, delete_location.file);
    assert_ne!(list_location.line, delete_location.line);
}
