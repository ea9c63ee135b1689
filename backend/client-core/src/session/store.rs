//! Persistence of the bearer token.
//!
//! The dashboard never reads the token from a global; every consumer is handed
//! an `Arc<dyn CredentialStore>` and asks it on demand.

use crate::error::SessionError;

use common::RedactedToken;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, info};
use serde::Deserialize;

pub trait CredentialStore: Send + Sync {
    /// Current token, or `None` when signed out.
    fn load(&self) -> Result<Option<RedactedToken>, SessionError>;

    fn store(&self, token: &RedactedToken) -> Result<(), SessionError>;

    /// Forget the token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

#[derive(Deserialize)]
struct StoredCredential {
    token: String,
}

/// Token kept in `session.json` inside the data directory.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<RedactedToken>, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No credential file at {:?}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(SessionError::credential_read(&self.path, e)),
        };

        let stored: StoredCredential = serde_json::from_str(&contents)
            .map_err(|e| SessionError::credential_parse(&self.path, e.to_string()))?;

        let token = RedactedToken::new(stored.token);
        if token.is_empty() {
            return Ok(None);
        }

        Ok(Some(token))
    }

    fn store(&self, token: &RedactedToken) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::credential_write(parent, e))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let body = serde_json::json!({ "token": token.as_str() }).to_string();

        fs::write(&temp_path, body).map_err(|e| SessionError::credential_write(&temp_path, e))?;
        restrict_permissions(&temp_path)?;

        fs::rename(&temp_path, &self.path)
            .map_err(|e| SessionError::credential_write(&self.path, e))?;

        info!("Stored token ({} chars) at {:?}", token.len(), self.path);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed stored token at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::credential_write(&self.path, e)),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), SessionError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| SessionError::credential_write(path, e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), SessionError> {
    Ok(())
}

/// In-process store, for one-shot tokens and tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<RedactedToken>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(RedactedToken::new(token))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<RedactedToken>, SessionError> {
        let guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn store(&self, token: &RedactedToken) -> Result<(), SessionError> {
        let mut guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
        Ok(())
    }
}
