//! Session accessor: supplies the bearer credential and user identity.
//!
//! The session is a single JSON blob `{token, user: {name, role}}` stored
//! whole at one of two well-known locations: a durable path under the user
//! config directory (the "remember me" choice) or an ephemeral path under
//! the runtime directory. Loading prefers the durable copy; a blob that
//! cannot be read or parsed counts as no session at all.
//!
//! This module owns no business logic beyond that. Login and registration
//! happen elsewhere; everything here assumes a session was already written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the session blob under either storage location.
const SESSION_FILE: &str = "session.json";

/// Errors that can occur while writing or clearing the session blob.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Underlying filesystem failure.
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The session could not be serialized.
    #[error("session encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for session-store operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// The signed-in user's identity, as the server reported it at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Role label (informational).
    pub role: String,
}

/// A stored session: bearer token plus user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer credential attached to every API call.
    pub token: String,
    /// The signed-in user.
    pub user: UserProfile,
}

/// Accessor over the two well-known session locations.
pub struct SessionStore {
    durable_path: PathBuf,
    ephemeral_path: PathBuf,
}

impl SessionStore {
    /// Create a store over explicit paths. Useful for testing.
    pub fn new(durable_path: PathBuf, ephemeral_path: PathBuf) -> Self {
        Self {
            durable_path,
            ephemeral_path,
        }
    }

    /// Create a store over the platform's default locations:
    /// `<config_dir>/filedock/session.json` for the durable copy and
    /// `<runtime_dir>/filedock/session.json` for the ephemeral one.
    pub fn with_default_paths() -> Self {
        let durable = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("filedock")
            .join(SESSION_FILE);
        let ephemeral = dirs::runtime_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("filedock")
            .join(SESSION_FILE);
        Self::new(durable, ephemeral)
    }

    /// Load the stored session, preferring the durable copy.
    ///
    /// Returns `None` when neither location holds a readable, parseable
    /// blob. Corruption is treated the same as absence — the caller's only
    /// recourse either way is signing in again.
    pub fn load(&self) -> Option<Session> {
        read_session(&self.durable_path).or_else(|| read_session(&self.ephemeral_path))
    }

    /// Persist a session to one of the two locations.
    ///
    /// `remember = true` writes the durable copy, otherwise the ephemeral
    /// one. Parent directories are created as needed.
    pub fn save(&self, session: &Session, remember: bool) -> SessionResult<()> {
        let path = if remember {
            &self.durable_path
        } else {
            &self.ephemeral_path
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let blob = serde_json::to_string(session)?;
        fs::write(path, blob)?;
        tracing::debug!("Session saved to {:?}", path);
        Ok(())
    }

    /// Remove the session from both locations (logout).
    pub fn clear(&self) -> SessionResult<()> {
        for path in [&self.durable_path, &self.ephemeral_path] {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        tracing::debug!("Session cleared");
        Ok(())
    }
}

fn read_session(path: &Path) -> Option<Session> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Ignoring unparseable session blob at {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user: UserProfile {
                name: "Ada".to_string(),
                role: "client".to_string(),
            },
        }
    }

    fn store_in(dir: &Path) -> SessionStore {
        SessionStore::new(
            dir.join("durable").join(SESSION_FILE),
            dir.join("ephemeral").join(SESSION_FILE),
        )
    }

    #[test]
    fn test_load_without_any_session() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(dir.path()).load(), None);
    }

    #[test]
    fn test_save_remembered_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&session("tok-1"), true).unwrap();
        assert_eq!(store.load(), Some(session("tok-1")));
    }

    #[test]
    fn test_save_ephemeral_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&session("tok-2"), false).unwrap();
        assert_eq!(store.load(), Some(session("tok-2")));
    }

    #[test]
    fn test_durable_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&session("ephemeral"), false).unwrap();
        store.save(&session("durable"), true).unwrap();

        assert_eq!(store.load().unwrap().token, "durable");
    }

    #[test]
    fn test_corrupt_blob_counts_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let path = dir.path().join("durable").join(SESSION_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_durable_falls_back_to_ephemeral() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&session("fallback"), false).unwrap();
        let path = dir.path().join("durable").join(SESSION_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "garbage").unwrap();

        assert_eq!(store.load().unwrap().token, "fallback");
    }

    #[test]
    fn test_clear_removes_both() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&session("a"), true).unwrap();
        store.save(&session("b"), false).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_session_blob_format() {
        let blob = serde_json::to_value(session("tok")).unwrap();
        assert_eq!(blob["token"], "tok");
        assert_eq!(blob["user"]["name"], "Ada");
        assert_eq!(blob["user"]["role"], "client");
    }
}
