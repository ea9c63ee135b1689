//! Shared building blocks for the shortener dashboard.
//!
//! Everything here is dependency-light so the `models`, `client-core` and
//! `dashboard` crates can all lean on it:
//!
//! - [`ErrorLocation`]: call-site capture attached to every error variant
//! - [`HttpStatusCode`]: status categorization without string parsing
//! - [`RedactedToken`]: the bearer token, never printed or serialized

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;

#[cfg(test)]
mod tests;
