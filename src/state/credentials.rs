//! Credential providers
//!
//! The HTTP layer never touches ambient storage directly: every client is
//! given a [`CredentialProvider`] at construction time and asks it for the
//! bearer token before each request.

use std::collections::BTreeMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::utils::errors::{SchoolAdminError, Result};

/// Key the bearer token is persisted under
pub const TOKEN_KEY: &str = "token";

/// Source of the bearer token attached to outgoing requests
pub trait CredentialProvider: Send + Sync + fmt::Debug {
    /// Current token, `None` when the user is logged out
    fn token(&self) -> Result<Option<String>>;

    /// Persist a token obtained from a login
    fn store_token(&self, token: &str) -> Result<()>;

    /// Forget the stored token
    fn clear_token(&self) -> Result<()>;
}

/// In-process token holder
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: RwLock<Option<String>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialProvider for MemoryCredentials {
    fn token(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .read()
            .map_err(|_| SchoolAdminError::Credentials("token lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn store_token(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SchoolAdminError::Credentials("token lock poisoned".to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| SchoolAdminError::Credentials("token lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Key-value JSON file holding the token under [`TOKEN_KEY`].
///
/// Other keys in the file are preserved on write.
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

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(SchoolAdminError::Credentials(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            SchoolAdminError::Credentials(format!("corrupt credential file {}: {}", self.path.display(), e))
        })
    }

    /// Replace the file atomically: readers see the old or the new contents,
    /// never a truncated file.
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut staged, entries)?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| {
            SchoolAdminError::Credentials(format!("cannot replace {}: {}", self.path.display(), e.error))
        })?;
        Ok(())
    }
}

impl CredentialProvider for FileCredentialStore {
    fn token(&self) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(TOKEN_KEY))
    }

    fn store_token(&self, token: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), "Stored access token");
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(TOKEN_KEY).is_some() {
            self.write_entries(&entries)?;
            debug!(path = %self.path.display(), "Cleared access token");
        }
        Ok(())
    }
}
