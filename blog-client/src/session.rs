use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// File name of the session blob when no explicit path is configured.
pub const DEFAULT_SESSION_FILE: &str = ".bloglist-session.json";

/// Signed-in session state persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

/// Error type for session persistence.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("failed to read session file: {0}")]
    Read(io::Error),

    #[error("failed to write session file: {0}")]
    Write(io::Error),

    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persists the session blob as JSON at a fixed location.
///
/// Read once on startup, overwritten on login, removed on logout.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the default session path.
    ///
    /// `BLOGLIST_SESSION` overrides; otherwise the blob lives in the user's
    /// home directory, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("BLOGLIST_SESSION") {
            return PathBuf::from(path);
        }

        match env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(DEFAULT_SESSION_FILE),
            Err(_) => PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }

    /// Load the persisted session, if any.
    ///
    /// # Returns
    /// The stored session, or None when no blob exists
    ///
    /// # Errors
    /// * `Read` - Blob exists but could not be read
    /// * `Corrupt` - Blob is not valid session JSON
    pub fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::Read(e)),
        };

        let session = serde_json::from_str(&contents)?;
        Ok(Some(session))
    }

    /// Persist a session, replacing any existing blob.
    ///
    /// # Errors
    /// * `Write` - Blob could not be written
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let contents = serde_json::to_string(session)?;
        fs::write(&self.path, contents).map_err(SessionStoreError::Write)
    }

    /// Remove the persisted blob. Removing a blob that is already gone is
    /// not an error.
    ///
    /// # Errors
    /// * `Write` - Blob exists but could not be removed
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Write(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;
    use std::time::UNIX_EPOCH;

    use super::*;

    fn temp_store() -> SessionStore {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = env::temp_dir().join(format!(
            "bloglist-session-test-{}-{}.json",
            std::process::id(),
            nanos
        ));
        SessionStore::new(path)
    }

    fn test_session() -> Session {
        Session {
            token: "header.payload.signature".to_string(),
            username: "root".to_string(),
            name: Some("Root User".to_string()),
        }
    }

    #[test]
    fn test_load_missing_blob_is_none() {
        let store = temp_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store();
        let session = test_session();

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
    }

    #[test]
    fn test_clear_removes_blob() {
        let store = temp_store();
        store.save(&test_session()).unwrap();

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let store = temp_store();
        fs::write(&store.path, "not json at all").unwrap();

        assert!(matches!(
            store.load(),
            Err(SessionStoreError::Corrupt(_))
        ));

        store.clear().unwrap();
    }
}
