use crate::{ModelError, ShortenRequestBuilder};

/// **VALUE**: Verifies that a blank long URL is rejected before any request is made.
///
/// **WHY THIS MATTERS**: The form's only rule is "long URL is required". A whitespace-only
/// value would otherwise reach the backend and come back as an opaque 400.
///
/// **BUG THIS CATCHES**: Would catch if trimming happens after the emptiness check.
#[test]
fn given_whitespace_long_url_when_building_then_returns_validation_error() {
    // GIVEN: A builder with a whitespace-only URL
    let builder = ShortenRequestBuilder::default().with_long_url("   ");

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Long URL cannot be empty");
        }
        Ok(request) => panic!("Expected validation error, got {request:?}"),
    }
}

#[test]
fn given_missing_long_url_when_building_then_returns_validation_error() {
    let result = ShortenRequestBuilder::default().with_topic("news").build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Long URL is required");
        }
        Ok(request) => panic!("Expected validation error, got {request:?}"),
    }
}

/// **VALUE**: Verifies optional fields default to empty strings and values are trimmed.
///
/// **WHY THIS MATTERS**: The backend distinguishes "no alias" by an empty string, exactly
/// as the web form posts it. Sending `null` or padded values changes which alias gets created.
#[test]
fn given_only_long_url_when_building_then_optional_fields_are_empty() {
    // GIVEN/WHEN: Only the long URL, padded
    let request = ShortenRequestBuilder::default()
        .with_long_url("  https://example.com/a/very/long/path  ")
        .build()
        .expect("valid request");

    // THEN: Trimmed URL, empty alias and topic
    assert_eq!(request.long_url, "https://example.com/a/very/long/path");
    assert_eq!(request.custom_alias, "");
    assert_eq!(request.topic, "");
}

#[test]
fn given_all_fields_when_serialized_then_uses_camel_case_keys() {
    let request = ShortenRequestBuilder::default()
        .with_long_url("https://example.com")
        .with_custom_alias(" promo ")
        .with_topic("marketing")
        .build()
        .expect("valid request");

    let json = serde_json::to_value(&request).expect("serializable");

    assert_eq!(
        json,
        serde_json::json!({
            "longUrl": "https://example.com",
            "customAlias": "promo",
            "topic": "marketing"
        })
    );
}
