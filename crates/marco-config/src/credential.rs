//! Durable storage for the user's assist-service API credential.
//!
//! The credential is an opaque string owned entirely by this device. It is
//! read once at startup, written or erased only on explicit user action,
//! and never logged; `Debug` redacts it.

use marco_common::ConfigError;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name under the marco config directory holding the credential.
const CREDENTIAL_FILE: &str = "credential";

/// File-backed store for the user's API credential.
///
/// Absence of a credential is a valid state. Setting an empty value is
/// equivalent to clearing. No shape validation happens locally; only the
/// remote service decides whether a credential is usable.
pub struct CredentialStore {
    path: PathBuf,
    cached: Option<String>,
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("path", &self.path)
            .field(
                "cached",
                &self.cached.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl CredentialStore {
    /// Open the store at the platform default location
    /// (`<config_dir>/marco/credential`), loading any saved credential.
    pub fn open_default() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::CredentialError("could not determine config directory".into())
        })?;
        Self::open_at(&config_dir.join("marco").join(CREDENTIAL_FILE))
    }

    /// Open the store at a specific path, loading any saved credential.
    pub fn open_at(path: &Path) -> Result<Self, ConfigError> {
        let cached = match std::fs::read_to_string(path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(ConfigError::CredentialError(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            cached,
        })
    }

    /// The saved credential, if any.
    pub fn get(&self) -> Option<&str> {
        self.cached.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.cached.is_some()
    }

    /// Save a credential. An empty (or whitespace-only) value clears instead.
    pub fn set(&mut self, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return self.clear();
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::CredentialError(format!(
                    "failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }
        std::fs::write(&self.path, value).map_err(|e| {
            ConfigError::CredentialError(format!("failed to write {}: {e}", self.path.display()))
        })?;

        self.cached = Some(value.to_string());
        info!("credential saved");
        Ok(())
    }

    /// Erase the credential from memory and disk.
    pub fn clear(&mut self) -> Result<(), ConfigError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::CredentialError(format!(
                    "failed to remove {}: {e}",
                    self.path.display()
                )))
            }
        }
        self.cached = None;
        info!("credential cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::open_at(&dir.path().join("credential")).unwrap()
    }

    #[test]
    fn starts_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get(), None);
        assert!(!store.is_present());
    }

    #[test]
    fn set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("sk-test-123").unwrap();
        assert_eq!(store.get(), Some("sk-test-123"));
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential");

        let mut store = CredentialStore::open_at(&path).unwrap();
        store.set("sk-persisted").unwrap();

        let reopened = CredentialStore::open_at(&path).unwrap();
        assert_eq!(reopened.get(), Some("sk-persisted"));
    }

    #[test]
    fn set_empty_is_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("sk-test-123").unwrap();
        store.set("").unwrap();
        assert_eq!(store.get(), None);
        assert!(!dir.path().join("credential").exists());
    }

    #[test]
    fn set_whitespace_is_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("sk-test-123").unwrap();
        store.set("   ").unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clear_removes_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential");
        let mut store = CredentialStore::open_at(&path).unwrap();

        store.set("sk-test-123").unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.get(), None);

        // Clearing again is fine
        store.clear().unwrap();
    }

    #[test]
    fn cleared_credential_does_not_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credential");

        let mut store = CredentialStore::open_at(&path).unwrap();
        store.set("sk-short-lived").unwrap();
        store.clear().unwrap();

        let reopened = CredentialStore::open_at(&path).unwrap();
        assert_eq!(reopened.get(), None);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("sk-very-secret").unwrap();

        let debug = format!("{store:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
