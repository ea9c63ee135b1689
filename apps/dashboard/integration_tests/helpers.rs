use dashboard::commands::Context;

use client_core::config::AppConfig;
use client_core::session::{CredentialStore, MemoryCredentialStore};
use client_core::views::Page;

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "cli-token-678";

/// Context against `server`, optionally signed in with [`TOKEN`].
pub fn context_for(
    server: &MockServer,
    token: Option<&str>,
) -> (Context, Arc<MemoryCredentialStore>) {
    context_with_start_page(server, token, Page::Dashboard)
}

pub fn context_with_start_page(
    server: &MockServer,
    token: Option<&str>,
    start_page: Page,
) -> (Context, Arc<MemoryCredentialStore>) {
    let store = Arc::new(match token {
        Some(token) => MemoryCredentialStore::with_token(token),
        None => MemoryCredentialStore::new(),
    });
    let credentials: Arc<dyn CredentialStore> = store.clone();

    let mut config = AppConfig::default();
    config.api.base_url = server.uri();
    config.ui.date_format = "%Y-%m-%d".to_string();
    config.ui.start_page = start_page;

    let ctx = Context::new(config, credentials, true).expect("Failed to build context");
    (ctx, store)
}

pub async fn mount_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/getUser"))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u-9",
            "displayName": "Grace Hopper",
            "email": "grace@example.com"
        })))
        .mount(server)
        .await;
}

pub fn url_json(id: &str, alias: &str) -> Value {
    json!({
        "_id": id,
        "longUrl": format!("https://example.com/{alias}"),
        "shortUrl": format!("https://sho.rt/{alias}"),
        "customAlias": alias,
        "clicks": 1,
        "totalClicks": 1
    })
}
