use crate::session::extract_token;

/// **VALUE**: Verifies the token is read from the full OAuth callback URL.
///
/// **WHY THIS MATTERS**: This is the normal login path: the user copies the address bar after
/// Google sign-in and pastes it into `login`.
///
/// **BUG THIS CATCHES**: Would catch if the whole URL were stored as the token, which the
/// backend would then reject on every request.
#[test]
fn given_callback_url_when_extracting_then_returns_token_param() {
    // GIVEN: The redirect target the backend issues after sign-in
    let input = "https://dashboard.example.com/?token=eyJhbGciOi.payload.sig&state=x";

    // WHEN: Extracting
    let token = extract_token(input).expect("token present");

    // THEN: Only the token parameter is kept
    assert_eq!(token.as_str(), "eyJhbGciOi.payload.sig");
}

#[test]
fn given_percent_encoded_token_when_extracting_then_decodes_it() {
    let token = extract_token("http://localhost:5173/?token=abc%2Bdef").expect("token present");

    assert_eq!(token.as_str(), "abc+def");
}

#[test]
fn given_bare_query_string_when_extracting_then_returns_token() {
    let token = extract_token("?token=tok-123").expect("token present");
    assert_eq!(token.as_str(), "tok-123");

    let token = extract_token("token=tok-456").expect("token present");
    assert_eq!(token.as_str(), "tok-456");
}

#[test]
fn given_bare_token_when_extracting_then_returns_it_trimmed() {
    let token = extract_token("  eyJhbGciOiJIUzI1NiJ9.e30.sig \n").expect("token present");

    assert_eq!(token.as_str(), "eyJhbGciOiJIUzI1NiJ9.e30.sig");
}

/// **VALUE**: Verifies that a callback without a token yields nothing instead of junk.
///
/// **WHY THIS MATTERS**: Pasting the wrong URL (for example the home page) must leave the user
/// signed out, the same as landing on `/` without `?token=` in the browser.
#[test]
fn given_url_without_token_when_extracting_then_returns_none() {
    // GIVEN: URLs with no usable token
    let inputs = [
        "https://dashboard.example.com/",
        "https://dashboard.example.com/?token=",
        "https://dashboard.example.com/?code=abc",
    ];

    // WHEN/THEN: None for each
    for input in inputs {
        assert!(extract_token(input).is_none(), "expected no token in {input}");
    }
}

#[test]
fn given_blank_or_spaced_input_when_extracting_then_returns_none() {
    assert!(extract_token("").is_none());
    assert!(extract_token("   ").is_none());
    assert!(extract_token("not a token").is_none());
}
