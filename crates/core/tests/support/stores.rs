//! In-memory session and settings stores

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use baitulmal_core::{SessionStore, SettingsStore};
use baitulmal_domain::{AuthSession, Result as DomainResult};

#[derive(Default, Clone)]
pub struct MemorySessionStore {
    session: Arc<Mutex<Option<AuthSession>>>,
}

impl MemorySessionStore {
    pub fn with_session(session: AuthSession) -> Self {
        Self { session: Arc::new(Mutex::new(Some(session))) }
    }

    pub fn current(&self) -> Option<AuthSession> {
        self.session.lock().unwrap().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> DomainResult<Option<AuthSession>> {
        Ok(self.current())
    }

    fn save(&self, session: &AuthSession) -> DomainResult<()> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> DomainResult<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct MemorySettingsStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
