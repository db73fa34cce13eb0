//! Session cookie persistence between CLI runs.
//!
//! The API identifies a signed-in reader by a cookie. A browser keeps it for
//! us; the CLI writes the cookie header for the configured origin to a small
//! JSON file after each command and loads it back into the client's jar on
//! the next start.

use reqwest::cookie::Jar;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::SessionError;

const SESSION_DIR: &str = "blogfront";
const SESSION_FILE: &str = "session.json";

/// What is written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Origin the cookie was issued for
    pub origin: String,
    /// `Cookie` header value, e.g. `connect.sid=s%3Aabc`
    pub cookie: String,
}

/// Reads and writes the persisted session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/blogfront/session.json`, if the platform has a data dir.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::data_dir()?.join(SESSION_DIR).join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored session, or `None` if there is none.
    ///
    /// A file that no longer parses is treated as no session.
    pub fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable session file: {}", err);
                Ok(None)
            }
        }
    }

    pub fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        let write_err = |source| SessionError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session)
            .map_err(|e| write_err(e.into()))?;
        writer.flush().map_err(write_err)
    }

    /// Forget the session. A missing file is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Load the stored cookie into `jar` if it was issued for `origin`.
    ///
    /// Returns whether anything was restored.
    pub fn restore_into(&self, jar: &Jar, origin: &url::Url) -> Result<bool, SessionError> {
        let Some(session) = self.load()? else {
            return Ok(false);
        };
        if session.origin != origin.as_str() {
            tracing::debug!(stored = %session.origin, current = %origin, "session belongs to another origin");
            return Ok(false);
        }
        for pair in session.cookie.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            jar.add_cookie_str(pair, origin);
        }
        Ok(true)
    }

    /// Save `cookie` for `origin`, or clear the file when there is none.
    pub fn persist(&self, origin: &url::Url, cookie: Option<String>) -> Result<(), SessionError> {
        match cookie {
            Some(cookie) => self.save(&StoredSession {
                origin: origin.as_str().to_string(),
                cookie,
            }),
            None => self.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join(SESSION_DIR).join(SESSION_FILE))
    }

    fn origin() -> url::Url {
        url::Url::parse("http://localhost:5000").unwrap()
    }

    #[test]
    fn test_missing_file_is_no_session() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let session = StoredSession {
            origin: "http://localhost:5000/".to_string(),
            cookie: "connect.sid=abc".to_string(),
        };

        store.save(&session).unwrap();

        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn test_corrupt_file_is_no_session() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.persist(&origin(), Some("a=1".to_string())).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert!(!store.path().exists());
    }

    #[test]
    fn test_persist_none_clears() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.persist(&origin(), Some("a=1".to_string())).unwrap();
        store.persist(&origin(), None).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_restore_into_jar() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .persist(&origin(), Some("connect.sid=abc; theme=dark".to_string()))
            .unwrap();

        let jar = Jar::default();
        assert!(store.restore_into(&jar, &origin()).unwrap());

        let header = jar.cookies(&origin()).unwrap();
        let header = header.to_str().unwrap();
        assert!(header.contains("connect.sid=abc"));
        assert!(header.contains("theme=dark"));
    }

    #[test]
    fn test_restore_skips_other_origin() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .persist(&url::Url::parse("https://blog.example").unwrap(), Some("a=1".to_string()))
            .unwrap();

        let jar = Jar::default();
        assert!(!store.restore_into(&jar, &origin()).unwrap());
        assert!(jar.cookies(&origin()).is_none());
    }
}
