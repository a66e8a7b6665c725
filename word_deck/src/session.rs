use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::{Error, Result};

const SESSION_PREFIX: &str = "session_";

/// Owns the results root and the per-run session directories beneath it.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the results root if it does not exist yet.
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Create a fresh session directory and return its name.
    ///
    /// Names are `session_YYYYmmdd_HHMMSS`; a second start within the same
    /// second gets a `_2`, `_3`, ... suffix so no directory is ever reused.
    pub fn create(&self) -> Result<String> {
        self.ensure_root()?;

        let base = format!("{}{}", SESSION_PREFIX, Local::now().format("%Y%m%d_%H%M%S"));
        let mut name = base.clone();
        let mut attempt = 1;

        loop {
            match fs::create_dir(self.root.join(&name)) {
                Ok(()) => {
                    info!(session = %name, "started session");
                    return Ok(name);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    attempt += 1;
                    name = format!("{base}_{attempt}");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Path of an existing session directory.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        if !is_valid_session_name(name) {
            return Err(Error::InvalidSession(name.to_string()));
        }

        let path = self.root.join(name);
        if !path.is_dir() {
            return Err(Error::UnknownSession(name.to_string()));
        }

        Ok(path)
    }

    /// Names of every session recorded so far, sorted by name.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| name.starts_with(SESSION_PREFIX))
            .collect();

        names.sort();
        Ok(names)
    }
}

fn is_valid_session_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_directory() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("results"));

        let name = store.create().unwrap();
        assert!(name.starts_with("session_"));
        assert!(dir.path().join("results").join(&name).is_dir());
    }

    #[test]
    fn test_sessions_are_never_reused() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        let names: Vec<String> = (0..5).map(|_| store.create().unwrap()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_resolve_existing_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        let name = store.create().unwrap();
        assert_eq!(store.resolve(&name).unwrap(), dir.path().join(&name));
    }

    #[test]
    fn test_resolve_rejects_bad_names() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        for bad in ["", "..", "../outside", "a/b", "session 1"] {
            assert!(
                matches!(store.resolve(bad), Err(Error::InvalidSession(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_unknown_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(matches!(
            store.resolve("session_19700101_000000"),
            Err(Error::UnknownSession(_))
        ));
    }

    #[test]
    fn test_list_sessions() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.list().unwrap().is_empty());

        let first = store.create().unwrap();
        let second = store.create().unwrap();
        fs::create_dir(dir.path().join("scratch")).unwrap();
        fs::write(dir.path().join("session_file"), "").unwrap();

        let mut expected = vec![first, second];
        expected.sort();
        assert_eq!(store.list().unwrap(), expected);
    }

    #[test]
    fn test_list_missing_root() {
        let store = SessionStore::new("/non/existent/results");
        assert!(store.list().unwrap().is_empty());
    }
}
