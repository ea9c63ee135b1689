//! Test helpers for client integration tests.
//!
//! Each test gets its own [`MockServer`] and an in-memory credential store,
//! so tests never share a token or a port.

use client_core::ShortenerClient;
use client_core::session::store::{CredentialStore, MemoryCredentialStore};

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-12345";

/// Client pointed at `server`, holding `token` if given.
pub fn client_for(
    server: &MockServer,
    token: Option<&str>,
) -> (ShortenerClient, Arc<MemoryCredentialStore>) {
    let store = Arc::new(match token {
        Some(token) => MemoryCredentialStore::with_token(token),
        None => MemoryCredentialStore::new(),
    });
    let credentials: Arc<dyn CredentialStore> = store.clone();

    let client = ShortenerClient::new(&server.uri(), Duration::from_secs(5), credentials)
        .expect("Failed to build client");

    (client, store)
}

pub fn url_json(id: &str, alias: &str, topic: &str, total_clicks: u64) -> Value {
    json!({
        "_id": id,
        "longUrl": format!("https://example.com/{alias}"),
        "shortUrl": format!("https://sho.rt/{alias}"),
        "customAlias": alias,
        "topic": topic,
        "clicks": total_clicks,
        "totalClicks": total_clicks,
        "createdAt": "2025-01-15T09:00:00.000Z"
    })
}

pub fn summary_json() -> Value {
    json!({
        "totalUrls": 2,
        "totalClicks": 9,
        "uniqueUsers": 4,
        "clicksByDate": [
            { "date": "2025-01-30", "clickCount": 3 },
            { "date": "2025-01-31", "clickCount": 6 }
        ],
        "osType": [{ "osName": "Windows", "uniqueClicks": 5, "uniqueUsers": 3 }],
        "deviceType": [{ "deviceName": "desktop", "uniqueClicks": 9, "uniqueUsers": 4 }]
    })
}
