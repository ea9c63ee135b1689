use crate::helpers::{TEST_TOKEN, client_for, summary_json, url_json};

use client_core::views::format::DEFAULT_DATE_FORMAT;
use client_core::views::{AnalyticsView, ChartPoint, OverviewView, ReportsView, SubmitOutcome};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Page view-models: fetch, fallback and refresh behaviour
// ============================================================================

async fn mount_url_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// **VALUE**: Verifies a successful submit creates the link, clears the form, and reloads the
/// table.
///
/// **WHY THIS MATTERS**: The new short link must appear in the table without the user asking
/// for a refresh.
///
/// **BUG THIS CATCHES**: Would catch skipping the refresh or leaving the old input in the form.
#[tokio::test]
async fn given_filled_form_when_submitting_then_creates_and_refreshes() {
    // GIVEN: Create and list endpoints
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .and(body_partial_json(json!({ "longUrl": "https://example.com/promo" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "shortUrl": "https://sho.rt/promo" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_url_list(&server, json!({ "data": [url_json("id-1", "promo", "", 0)] })).await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = OverviewView::new();
    view.form.long_url = "https://example.com/promo".to_string();
    view.form.custom_alias = "promo".to_string();

    // WHEN: Submitting
    let outcome = view.submit(&client).await;

    // THEN: Created, form cleared, table reloaded
    assert_eq!(
        outcome,
        SubmitOutcome::Created {
            short_url: Some("https://sho.rt/promo".to_string())
        }
    );
    assert!(view.form.long_url.is_empty());
    assert!(view.form.custom_alias.is_empty());
    assert_eq!(view.total(), 1);
    assert!(view.last_update().is_some());
}

#[tokio::test]
async fn given_blank_long_url_when_submitting_then_nothing_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = OverviewView::new();
    view.form.long_url = "   ".to_string();
    view.form.topic = "kept".to_string();

    let outcome = view.submit(&client).await;

    assert_eq!(outcome, SubmitOutcome::Skipped);
    assert_eq!(view.form.topic, "kept");
}

#[tokio::test]
async fn given_backend_rejects_when_submitting_then_failed_and_form_cleared() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Alias already taken"))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = OverviewView::new();
    view.form.long_url = "https://example.com".to_string();

    let outcome = view.submit(&client).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(view.form.long_url.is_empty());
    assert!(view.last_update().is_none());
}

/// **VALUE**: Verifies a failed reload keeps the rows already on screen.
///
/// **WHY THIS MATTERS**: A transient backend hiccup should not blank the user's link table.
#[tokio::test]
async fn given_loaded_table_when_refresh_fails_then_previous_rows_kept() {
    // GIVEN: One good list response, then errors
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [url_json("id-1", "a", "", 1), url_json("id-2", "b", "", 2)]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/getUrls"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = OverviewView::new();
    view.refresh(&client).await;
    assert_eq!(view.total(), 2);

    // WHEN: Refreshing again
    view.refresh(&client).await;

    // THEN: Rows unchanged
    assert_eq!(view.total(), 2);
}

#[tokio::test]
async fn given_row_when_deleting_then_table_reloaded_without_it() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/url/id-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mount_url_list(&server, json!({ "data": [url_json("id-2", "b", "", 2)] })).await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = OverviewView::new();

    let deleted = view.delete(&client, "id-1").await;

    assert!(deleted);
    assert_eq!(view.urls()[0].record_id(), Some("id-2"));
}

#[tokio::test]
async fn given_delete_rejected_when_deleting_then_reports_false() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = OverviewView::new();

    assert!(!view.delete(&client, "missing").await);
    assert!(view.last_update().is_none());
}

#[tokio::test]
async fn given_overall_endpoint_when_loading_analytics_then_cards_populated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/overall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_json()))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = AnalyticsView::new();

    view.load(&client).await;

    assert_eq!(view.stat_cards()[1].value, 9);
    assert_eq!(view.stat_cards()[3].value, 1);
    assert_eq!(view.os_distribution(), vec![ChartPoint::new("Windows", 5)]);
}

/// **VALUE**: Verifies a failed analytics fetch shows zeros instead of stale figures.
///
/// **BUG THIS CATCHES**: Would catch keeping the previous summary, which would show numbers
/// that no longer match the backend.
#[tokio::test]
async fn given_loaded_analytics_when_reload_fails_then_resets_to_zero() {
    // GIVEN: A successful load followed by a failing one
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/overall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_json()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/overall"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = AnalyticsView::new();
    view.load(&client).await;
    assert_eq!(view.summary().total_urls, 2);

    // WHEN: Reloading
    view.load(&client).await;

    // THEN: All zero
    assert!(view.stat_cards().iter().all(|card| card.value == 0));
    assert!(view.clicks_over_time(DEFAULT_DATE_FORMAT).is_empty());
}

/// **VALUE**: Verifies the reports page loads options, then charts the selected topic.
///
/// **WHY THIS MATTERS**: This is the only path from the selector to the topic endpoint.
#[tokio::test]
async fn given_topic_selected_when_loading_selection_then_charts_topic_clicks() {
    // GIVEN: URLs with topics and a topic analytics endpoint
    let server = MockServer::start().await;
    mount_url_list(
        &server,
        json!({ "data": [
            url_json("id-1", "a", "news", 1),
            url_json("id-2", "b", "tech", 2),
            url_json("id-3", "c", "news", 3)
        ] }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/topic"))
        .and(query_param("topic", "news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_json()))
        .expect(1)
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = ReportsView::new();
    view.load(&client).await;
    assert_eq!(view.topics(), ["news", "tech"]);

    // WHEN: Selecting a topic and loading it
    view.select_topic(Some("news".to_string()));
    view.load_selection(&client).await;

    // THEN: Chart shows the topic's date buckets
    assert_eq!(
        view.chart_data(DEFAULT_DATE_FORMAT),
        vec![
            ChartPoint::new("2025-01-30", 3),
            ChartPoint::new("2025-01-31", 6)
        ]
    );
}

#[tokio::test]
async fn given_alias_analytics_fails_when_loading_selection_then_falls_back_to_urls() {
    let server = MockServer::start().await;
    mount_url_list(&server, json!({ "data": [url_json("id-1", "a", "news", 1)] })).await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/a"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let (client, _) = client_for(&server, Some(TEST_TOKEN));
    let mut view = ReportsView::new();
    view.load(&client).await;

    view.select_alias(Some("a".to_string()));
    view.load_selection(&client).await;

    assert_eq!(
        view.chart_data(DEFAULT_DATE_FORMAT),
        vec![ChartPoint::new("news", 1)]
    );
}
