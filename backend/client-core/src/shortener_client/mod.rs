//! Typed client for the shortener REST API.
//!
//! Every authenticated call reads the token from the injected
//! [`CredentialStore`] at request time, so a login or logout performed
//! elsewhere takes effect on the next call. When no token is stored the
//! request is not sent.

use crate::error::ShortenerClientError;
use crate::session::store::CredentialStore;

use common::{ErrorLocation, HttpStatusCode, RedactedToken};
use models::{
    AnalyticsSummary, RedirectResponse, ShortenRequest, ShortenResponse, UrlListResponse,
    UrlRecord, UserProfile,
};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use const_format::concatcp;
use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

const API_PREFIX: &str = "api/";
const AUTH_GOOGLE_ENDPOINT: &str = concatcp!(API_PREFIX, "auth/google");
const AUTH_GET_USER_ENDPOINT: &str = concatcp!(API_PREFIX, "auth/getUser");
const SHORTEN_ENDPOINT: &str = concatcp!(API_PREFIX, "shorten");
const GET_URLS_ENDPOINT: &str = concatcp!(API_PREFIX, "getUrls");
const URL_ENDPOINT: &str = concatcp!(API_PREFIX, "url");
const ANALYTICS_ENDPOINT: &str = concatcp!(API_PREFIX, "analytics");
const ANALYTICS_OVERALL_ENDPOINT: &str = concatcp!(ANALYTICS_ENDPOINT, "/overall");
const ANALYTICS_TOPIC_ENDPOINT: &str = concatcp!(ANALYTICS_ENDPOINT, "/topic");
const TOPIC_QUERY_KEY: &str = "topic";

#[derive(Clone)]
pub struct ShortenerClient {
    base_url: Url,
    client: Client,
    credentials: Arc<dyn CredentialStore>,
}

impl ShortenerClient {
    pub fn new(
        base_url_str: &str,
        timeout: Duration,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, ShortenerClientError> {
        let mut base_url = Url::parse(base_url_str)?;
        if base_url.cannot_be_a_base() {
            return Err(ShortenerClientError::url_parse(format!(
                "Base URL cannot carry paths: {base_url_str}"
            )));
        }

        // Url::join replaces the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Where the browser must go to start Google sign-in.
    pub fn login_url(&self) -> Result<Url, ShortenerClientError> {
        Ok(self.base_url.join(AUTH_GOOGLE_ENDPOINT)?)
    }

    /// Profile of the token holder.
    ///
    /// A 401 means the token expired or was revoked: it is removed from the
    /// store before the error is returned.
    pub async fn get_user(&self) -> Result<UserProfile, ShortenerClientError> {
        let url = self.base_url.join(AUTH_GET_USER_ENDPOINT)?;
        let request = self.authorized(self.client.get(url))?;

        match self.send(request).await {
            Ok(response) => read_json(response).await,
            Err(e @ ShortenerClientError::Unauthorized { .. }) => {
                warn!("Profile request unauthorized, clearing stored token");
                self.credentials.clear()?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn create_url(
        &self,
        request: &ShortenRequest,
    ) -> Result<ShortenResponse, ShortenerClientError> {
        let url = self.base_url.join(SHORTEN_ENDPOINT)?;
        let request = self.authorized(self.client.post(url))?.json(request);

        let response = self.send(request).await?;
        read_json(response).await
    }

    pub async fn list_urls(&self) -> Result<Vec<UrlRecord>, ShortenerClientError> {
        let url = self.base_url.join(GET_URLS_ENDPOINT)?;
        let request = self.authorized(self.client.get(url))?;

        let response = self.send(request).await?;
        let envelope: UrlListResponse = read_json(response).await?;

        Ok(envelope.data)
    }

    pub async fn delete_url(&self, id: &str) -> Result<(), ShortenerClientError> {
        let url = self.endpoint_with_segment(URL_ENDPOINT, id)?;
        let request = self.authorized(self.client.delete(url))?;

        self.send(request).await?;
        Ok(())
    }

    /// Destination of a short alias.
    pub async fn resolve_alias(&self, alias: &str) -> Result<String, ShortenerClientError> {
        let url = self.endpoint_with_segment(SHORTEN_ENDPOINT, alias)?;
        let request = self.authorized(self.client.get(url))?;

        let response = self.send(request).await?;
        let redirect: RedirectResponse = read_json(response).await?;

        redirect
            .long_url
            .filter(|long_url| !long_url.is_empty())
            .ok_or_else(|| ShortenerClientError::invalid_response("missing longUrl"))
    }

    pub async fn overall_analytics(&self) -> Result<AnalyticsSummary, ShortenerClientError> {
        let url = self.base_url.join(ANALYTICS_OVERALL_ENDPOINT)?;
        self.get_analytics(url).await
    }

    pub async fn topic_analytics(
        &self,
        topic: &str,
    ) -> Result<AnalyticsSummary, ShortenerClientError> {
        let mut url = self.base_url.join(ANALYTICS_TOPIC_ENDPOINT)?;
        url.query_pairs_mut().append_pair(TOPIC_QUERY_KEY, topic);
        self.get_analytics(url).await
    }

    pub async fn alias_analytics(
        &self,
        alias: &str,
    ) -> Result<AnalyticsSummary, ShortenerClientError> {
        let url = self.endpoint_with_segment(ANALYTICS_ENDPOINT, alias)?;
        self.get_analytics(url).await
    }

    async fn get_analytics(&self, url: Url) -> Result<AnalyticsSummary, ShortenerClientError> {
        let request = self.authorized(self.client.get(url))?;
        let response = self.send(request).await?;
        read_json(response).await
    }

    fn token(&self) -> Result<RedactedToken, ShortenerClientError> {
        self.credentials
            .load()?
            .ok_or_else(ShortenerClientError::missing_token)
    }

    /// Attach the stored token as-is: the backend expects the raw value,
    /// without a `Bearer ` scheme.
    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ShortenerClientError> {
        let token = self.token()?;
        Ok(request.header(AUTHORIZATION, token.as_str()))
    }

    /// `{base}/{prefix}/{segment}` with `segment` percent-encoded.
    fn endpoint_with_segment(
        &self,
        prefix: &str,
        segment: &str,
    ) -> Result<Url, ShortenerClientError> {
        let mut url = self.base_url.join(prefix)?;
        url.path_segments_mut()
            .map_err(|_| ShortenerClientError::url_parse("base URL cannot carry paths"))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Send `request` and map non-2xx statuses to errors.
    ///
    /// Not an `async fn` so that `#[track_caller]` applies: error locations
    /// point at the endpoint method, not at this helper.
    #[track_caller]
    fn send(
        &self,
        request: RequestBuilder,
    ) -> impl Future<Output = Result<Response, ShortenerClientError>> {
        let location = ErrorLocation::from(Location::caller());
        send_checked(request, location)
    }
}

async fn send_checked(
    request: RequestBuilder,
    location: ErrorLocation,
) -> Result<Response, ShortenerClientError> {
    let response = request.send().await?;
    let status = HttpStatusCode::from(response.status().as_u16());

    debug!("{} -> HTTP {}", response.url().path(), status);

    if response.status().is_success() {
        return Ok(response);
    }

    if status.is_unauthorized() {
        return Err(ShortenerClientError::Unauthorized { location });
    }

    if status.is_server_error() {
        warn!("Backend failed on {}: HTTP {}", response.url().path(), status);
    }

    Err(ShortenerClientError::Server {
        status,
        message: response.text().await.unwrap_or_default(),
        location,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ShortenerClientError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
