use crate::{AnalyticsSummary, UrlListResponse, UrlRecord, UserProfile};

/// **VALUE**: Verifies a Mongo-style record deserializes and exposes `_id` as the delete key.
///
/// **WHY THIS MATTERS**: Deleting uses `_id`. Picking `id` (or nothing) would send
/// `DELETE /api/url/` and silently fail.
#[test]
fn given_backend_url_record_when_deserialized_then_record_id_prefers_object_id() {
    // GIVEN: A record as the backend returns it
    let json = serde_json::json!({
        "_id": "65f0c0ffee",
        "id": "legacy-1",
        "longUrl": "https://example.com/article",
        "shortUrl": "https://sho.rt/abc",
        "customAlias": "abc",
        "topic": "",
        "clicks": 12,
        "createdAt": "2025-02-01T10:00:00.000Z"
    });

    // WHEN: Deserializing
    let record: UrlRecord = serde_json::from_value(json).expect("valid record");

    // THEN: `_id` wins, empty topic renders as a dash
    assert_eq!(record.record_id(), Some("65f0c0ffee"));
    assert_eq!(record.alias_or_dash(), "abc");
    assert_eq!(record.topic_or_dash(), "-");
    assert_eq!(record.clicks, 12);
    assert_eq!(record.total_clicks, None);
}

#[test]
fn given_record_without_object_id_when_record_id_then_falls_back_to_id() {
    let record = UrlRecord {
        id: Some("42".to_string()),
        ..UrlRecord::default()
    };

    assert_eq!(record.record_id(), Some("42"));
    assert_eq!(UrlRecord::default().record_id(), None);
}

#[test]
fn given_url_list_envelope_when_deserialized_then_reads_data_array() {
    let json = r#"{"data":[{"longUrl":"https://a.example","shortUrl":"https://s/1"}]}"#;

    let response: UrlListResponse = serde_json::from_str(json).expect("valid envelope");

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].alias_or_dash(), "-");
}

/// **VALUE**: Verifies a partial analytics payload deserializes with zeroed defaults.
///
/// **WHY THIS MATTERS**: Topic analytics omits OS/device sections; alias analytics omits
/// `totalUrls`. The views render zeros rather than failing the whole page.
#[test]
fn given_partial_analytics_when_deserialized_then_missing_sections_default() {
    // GIVEN: A topic analytics payload
    let json = serde_json::json!({
        "totalClicks": 9,
        "uniqueUsers": 4,
        "clicksByDate": [{"date": "2025-02-01", "clickCount": 9}],
        "urls": [{"shortUrl": "https://s/1", "totalClicks": 9, "uniqueUsers": 4}]
    });

    // WHEN: Deserializing
    let summary: AnalyticsSummary = serde_json::from_value(json).expect("valid summary");

    // THEN: Present fields are read, absent ones are empty
    assert_eq!(summary.total_urls, 0);
    assert_eq!(summary.total_clicks, 9);
    assert_eq!(summary.clicks_by_date[0].click_count, 9);
    assert!(summary.os_type.is_empty());
    assert_eq!(summary.urls[0].total_clicks, 9);
}

#[test]
fn given_profile_with_only_email_when_greeting_then_uses_email() {
    let profile = UserProfile {
        email: Some("ada@example.com".to_string()),
        ..UserProfile::default()
    };

    assert_eq!(profile.greeting_name(), "ada@example.com");
    assert_eq!(UserProfile::default().greeting_name(), "there");
}
