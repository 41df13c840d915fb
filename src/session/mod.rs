//! Session persistence.
//!
//! Keeps the logged-in identity across invocations as two string entries,
//! `token` and `username`. The default backend is a JSON file in the snooze
//! data directory; the OS keychain can be used instead when available.

use keyring::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::User;

/// Service name for keyring storage.
pub const KEYRING_SERVICE: &str = "snooze";

/// Keyring entry holding the session record.
pub const KEYRING_SESSION_USER: &str = "session";

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";

/// A persisted login: both fields or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    /// Builds a session from raw key-value entries.
    ///
    /// A record missing either key, or holding an empty value, is treated
    /// as no session at all.
    fn from_entries(entries: &BTreeMap<String, String>) -> Option<Self> {
        let token = entries.get(TOKEN_KEY).filter(|v| !v.is_empty())?;
        let username = entries.get(USERNAME_KEY).filter(|v| !v.is_empty())?;
        Some(Self {
            token: token.clone(),
            username: username.clone(),
        })
    }

    fn to_entries(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (TOKEN_KEY.to_string(), self.token.clone()),
            (USERNAME_KEY.to_string(), self.username.clone()),
        ])
    }
}

/// Custom error type for session storage.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading or writing the session file failed.
    #[error("Session file error: {0}")]
    Io(String),

    /// Keyring storage error.
    #[error("Credential storage error: {0}")]
    Keyring(String),

    /// The session record could not be encoded or decoded.
    #[error("Corrupt session record: {0}")]
    Corrupt(String),
}

/// Session storage abstraction over a file or the OS keychain.
///
/// The file path is kept even when the keychain is in use, so a session
/// written before switching backends is still erased on logout.
pub struct SessionStore {
    path: PathBuf,
    use_keyring: bool,
}

impl SessionStore {
    /// Stores the session as JSON at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_keyring: false,
        }
    }

    /// Uses the OS keychain when it responds, otherwise the file at `fallback`.
    pub fn keyring_or_file(fallback: impl Into<PathBuf>) -> Self {
        let use_keyring = Self::keyring_available();
        if !use_keyring {
            tracing::warn!("OS keychain unavailable, storing session in a file");
        }
        Self {
            path: fallback.into(),
            use_keyring,
        }
    }

    /// Tests whether the keyring is available by attempting a dummy operation.
    fn keyring_available() -> bool {
        match Entry::new(KEYRING_SERVICE, "test-availability") {
            Ok(entry) => matches!(entry.get_password(), Ok(_) | Err(keyring::Error::NoEntry)),
            Err(_) => false,
        }
    }

    /// Where the session lives, for display.
    pub fn location(&self) -> String {
        if self.use_keyring {
            format!("OS keychain ({KEYRING_SERVICE})")
        } else {
            self.path.display().to_string()
        }
    }

    /// Reads the persisted session, if both entries are present.
    ///
    /// A record that does not parse is logged and reported as no session, so
    /// a damaged file never locks the user out.
    pub fn restore(&self) -> Result<Option<Session>, SessionError> {
        let entries = if self.use_keyring {
            read_keyring()
        } else {
            read_file(&self.path)
        };

        match entries {
            Ok(entries) => Ok(entries.as_ref().and_then(Session::from_entries)),
            Err(SessionError::Corrupt(e)) => {
                tracing::warn!("Ignoring unreadable session record at {}: {e}", self.location());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Persists the token and username of `user`. Does nothing for `None`.
    pub fn save(&self, user: Option<&User>) -> Result<(), SessionError> {
        let Some(user) = user else {
            return Ok(());
        };

        let session = Session {
            token: user.login_token.clone(),
            username: user.username.clone(),
        };
        let json = serde_json::to_string_pretty(&session.to_entries())
            .map_err(|e| SessionError::Corrupt(format!("Serialization error: {e}")))?;

        if self.use_keyring {
            keyring_entry()?
                .set_password(&json)
                .map_err(|e| SessionError::Keyring(e.to_string()))
        } else {
            write_file(&self.path, &json)
        }
    }

    /// Erases the persisted session from the file and, when in use, the keychain.
    pub fn clear(&self) -> Result<(), SessionError> {
        delete_file(&self.path)?;

        if self.use_keyring {
            match keyring_entry()?.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(e) => return Err(SessionError::Keyring(e.to_string())),
            }
        }

        Ok(())
    }
}

// ==================== File operations ====================

fn read_file(path: &Path) -> Result<Option<BTreeMap<String, String>>, SessionError> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .map_err(|e| SessionError::Io(format!("Failed to read session file: {e}")))?;
    parse_entries(&json).map(Some)
}

fn write_file(path: &Path, json: &str) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SessionError::Io(format!("Failed to create data directory: {e}")))?;
    }

    fs::write(path, json)
        .map_err(|e| SessionError::Io(format!("Failed to write session file: {e}")))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)
            .map_err(|e| SessionError::Io(format!("Failed to set file permissions: {e}")))?;
    }

    Ok(())
}

fn delete_file(path: &Path) -> Result<(), SessionError> {
    if path.exists() {
        fs::remove_file(path)
            .map_err(|e| SessionError::Io(format!("Failed to delete session file: {e}")))?;
    }
    Ok(())
}

// ==================== Keyring operations ====================

fn keyring_entry() -> Result<Entry, SessionError> {
    Entry::new(KEYRING_SERVICE, KEYRING_SESSION_USER)
        .map_err(|e| SessionError::Keyring(e.to_string()))
}

fn read_keyring() -> Result<Option<BTreeMap<String, String>>, SessionError> {
    match keyring_entry()?.get_password() {
        Ok(json) => parse_entries(&json).map(Some),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(SessionError::Keyring(e.to_string())),
    }
}

fn parse_entries(json: &str) -> Result<BTreeMap<String, String>, SessionError> {
    serde_json::from_str(json).map_err(|e| SessionError::Corrupt(e.to_string()))
}
