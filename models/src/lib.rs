//! Data echoed from the shortener backend.
//!
//! These are plain DTOs: the client holds the latest fetch result and does
//! not reconcile or merge them. Field names follow the backend's camelCase
//! JSON; every field that the backend may omit defaults.

pub mod analytics;
pub mod error;
pub mod shorten;
pub mod url_record;
pub mod user;

pub use analytics::{AnalyticsSummary, ClicksByDate, DeviceTypeStat, OsTypeStat, UrlClicks};
pub use error::model_error::ModelError;
pub use shorten::builder::ShortenRequestBuilder;
pub use shorten::{RedirectResponse, ShortenRequest, ShortenResponse};
pub use url_record::{UrlListResponse, UrlRecord};
pub use user::UserProfile;

pub(crate) use common::ErrorLocation;

#[cfg(test)]
mod tests;
