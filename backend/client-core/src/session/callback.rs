//! Token extraction from the OAuth callback.
//!
//! After Google sign-in the backend redirects to `<frontend>/?token=<token>`.
//! A terminal client cannot receive that redirect, so the user pastes the
//! final URL (or only the token) back into `login`.

use common::RedactedToken;

use std::borrow::Cow;

use url::{Url, form_urlencoded};

const TOKEN_PARAM: &str = "token";

/// Pull the token out of a callback URL, a query string, or a bare token.
///
/// Returns `None` for blank input and for URLs that carry no token.
pub fn extract_token(input: &str) -> Option<RedactedToken> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(input) {
        if matches!(url.scheme(), "http" | "https") {
            return token_from_pairs(url.query_pairs());
        }
    }

    if let Some(query) = input.strip_prefix('?') {
        return token_from_pairs(form_urlencoded::parse(query.as_bytes()));
    }

    if input.starts_with("token=") || input.contains("&token=") {
        return token_from_pairs(form_urlencoded::parse(input.as_bytes()));
    }

    if input.chars().any(char::is_whitespace) {
        return None;
    }

    Some(RedactedToken::new(input))
}

fn token_from_pairs<'a>(
    mut pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
) -> Option<RedactedToken> {
    pairs
        .find(|(key, _)| key == TOKEN_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(RedactedToken::new)
}
