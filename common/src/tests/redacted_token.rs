use crate::RedactedToken;

/// **VALUE**: Verifies the token value never shows up in Debug or Display output.
///
/// **WHY THIS MATTERS**: Sessions and clients are logged at debug level. A leaked bearer token
/// in a log file is a full account takeover.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual impl.
#[test]
fn given_token_when_formatted_then_value_is_hidden() {
    // GIVEN: A token
    let token = RedactedToken::new("eyJhbGciOiJIUzI1NiJ9.secret");

    // WHEN: Formatting both ways
    let debug = format!("{token:?}");
    let display = format!("{token}");

    // THEN: Neither contains the secret
    assert!(!debug.contains("secret"));
    assert!(!display.contains("secret"));
    assert_eq!(token.as_str(), "eyJhbGciOiJIUzI1NiJ9.secret");
    assert_eq!(token.len(), 27);
}

/// **VALUE**: Verifies that serializing a token fails instead of writing the value.
///
/// **BUG THIS CATCHES**: Would catch a `#[derive(Serialize)]` sneaking the token into JSON output
/// (for example `dashboard whoami --json`).
#[test]
fn given_token_when_serialized_then_returns_error() {
    // GIVEN: A token
    let token = RedactedToken::new("abc123");

    // WHEN: Serializing
    let result = serde_json::to_string(&token);

    // THEN: Serialization is refused
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("cannot be serialized"));
}

#[test]
fn given_empty_token_when_checked_then_is_empty() {
    assert!(RedactedToken::new("").is_empty());
    assert!(!RedactedToken::new("x").is_empty());
}
