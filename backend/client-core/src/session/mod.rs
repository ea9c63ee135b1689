//! Sign-in state of the dashboard.
//!
//! The session is an explicit value handed to whoever renders user data,
//! rather than an ambient "current user". The token itself stays in the
//! [`CredentialStore`](store::CredentialStore); the session only carries the
//! profile fetched with it.

pub mod callback;
pub mod paths;
pub mod store;

pub use callback::extract_token;
pub use paths::{DataPaths, PathSource, detect_data_paths};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};

use crate::error::SessionError;
use crate::shortener_client::ShortenerClient;

use models::UserProfile;

use log::{error, info, warn};
use serde::Serialize;

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: UserProfile,
}

pub struct SessionManager {
    client: ShortenerClient,
}

impl SessionManager {
    pub fn new(client: ShortenerClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ShortenerClient {
        &self.client
    }

    /// Complete sign-in from the pasted OAuth callback (or bare token).
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Session))` - token stored and profile fetched
    /// * `Ok(None)` - no token in the input, or the profile fetch failed
    /// * `Err(SessionError)` - the token could not be persisted
    pub async fn login_with_callback(&self, input: &str) -> Result<Option<Session>, SessionError> {
        let Some(token) = extract_token(input) else {
            warn!("No token found in login callback input");
            return Ok(None);
        };

        info!("Token received ({} chars)", token.len());
        self.client.credentials().store(&token)?;

        Ok(self.fetch_session().await)
    }

    /// Sign back in with the stored token, if there is one.
    pub async fn restore(&self) -> Option<Session> {
        match self.client.credentials().load() {
            Ok(Some(_)) => self.fetch_session().await,
            Ok(None) => None,
            Err(e) => {
                error!("Error reading stored token: {}", e);
                None
            }
        }
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.client.credentials().clear()?;
        info!("Logged out");
        Ok(())
    }

    async fn fetch_session(&self) -> Option<Session> {
        match self.client.get_user().await {
            Ok(user) => {
                info!("Signed in as {}", user.greeting_name());
                Some(Session { user })
            }
            Err(e) => {
                error!("Error fetching user profile: {}", e);
                None
            }
        }
    }
}
