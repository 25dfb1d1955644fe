//! JSON key-value file
//!
//! One flat JSON object holds every persisted key: the session under
//! `auth`, preferences under their own keys. The file is read once on open
//! and rewritten through a sibling temp file on every change.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use baitulmal_core::{SessionStore, SettingsStore};
use baitulmal_domain::constants::storage_keys;
use baitulmal_domain::{AuthSession, BaitulMalError, Result};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::InfraError;

type Entries = BTreeMap<String, Value>;

/// File-backed store shared by [`SessionStore`] and [`SettingsStore`]
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl LocalStore {
    /// Open the store at `path`, starting empty when the file is missing
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be read or is
    /// not a JSON object
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Entries::new(),
            Ok(bytes) => serde_json::from_slice::<Entries>(&bytes).map_err(|err| {
                BaitulMalError::Storage(format!("{} is not a JSON object: {err}", path.display()))
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file yet");
                Entries::new()
            }
            Err(err) => return Err(InfraError::from(err).into()),
        };

        Ok(Self { path, entries: Mutex::new(entries) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw value stored under `key`
    pub fn value(&self, key: &str) -> Option<Value> {
        self.entries.lock().get(key).cloned()
    }

    /// Apply a change to a copy and keep it only once it is on disk
    fn update(&self, apply: impl FnOnce(&mut Entries) -> bool) -> Result<()> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        if !apply(&mut next) {
            return Ok(());
        }
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }
        let json = serde_json::to_vec_pretty(entries).map_err(InfraError::from)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, json).map_err(InfraError::from)?;
        fs::rename(&tmp, &self.path).map_err(InfraError::from)?;

        debug!(path = %self.path.display(), keys = entries.len(), "state file written");
        Ok(())
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Result<Option<AuthSession>> {
        let Some(value) = self.value(storage_keys::AUTH) else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!(error = %err, "ignoring unreadable stored session");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        let value = serde_json::to_value(session).map_err(InfraError::from)?;
        self.update(|entries| {
            entries.insert(storage_keys::AUTH.to_string(), value);
            true
        })
    }

    fn clear(&self) -> Result<()> {
        self.update(|entries| entries.remove(storage_keys::AUTH).is_some())
    }
}

impl SettingsStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key).map(|value| match value {
            Value::String(text) => text,
            other => other.to_string(),
        }))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let value = Value::String(value.to_string());
        self.update(|entries| entries.insert(key.to_string(), value.clone()) != Some(value))
    }
}

#[cfg(test)]
mod tests {
    use baitulmal_domain::UserRole;
    use tempfile::TempDir;

    use super::*;

    fn session() -> AuthSession {
        AuthSession {
            id: "u-1".into(),
            name: "Amina".into(),
            last_name: "Hodžić".into(),
            phone_number: "+38761000000".into(),
            email: "amina@baitulmal.ba".into(),
            role: UserRole::FinanceLead,
            jwt: "token-1".into(),
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.get("theme").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn session_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        LocalStore::open(&path).unwrap().save(&session()).unwrap();

        let reopened = LocalStore::open(&path).unwrap();
        assert_eq!(reopened.load().unwrap(), Some(session()));
        reopened.clear().unwrap();
        assert_eq!(LocalStore::open(&path).unwrap().load().unwrap(), None);
    }

    #[test]
    fn settings_and_session_share_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let store = LocalStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.save(&session()).unwrap();
        store.clear().unwrap();

        let raw: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "theme": "dark" }));
    }

    #[test]
    fn failed_write_keeps_memory_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        let store = LocalStore::open(blocker.join("state.json")).unwrap();
        fs::write(&blocker, "").unwrap();

        assert!(store.save(&session()).is_err());
        assert_eq!(store.load().unwrap(), None);

        assert!(store.set("theme", "dark").is_err());
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn failed_clear_keeps_the_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state").join("state.json");
        let store = LocalStore::open(&path).unwrap();
        store.save(&session()).unwrap();

        fs::remove_dir_all(dir.path().join("state")).unwrap();
        fs::write(dir.path().join("state"), "").unwrap();

        assert!(store.clear().is_err());
        assert_eq!(store.load().unwrap(), Some(session()));
    }

    #[test]
    fn corrupt_session_reads_as_signed_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"auth": {"jwt": 5}}"#).unwrap();

        let store = LocalStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn non_object_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1, 2]").unwrap();

        let err = LocalStore::open(&path).unwrap_err();
        assert!(matches!(err, BaitulMalError::Storage(_)));
    }
}
