//! Session persistence over three fixed key/value entries

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

/// Storage key for the access token
pub const TOKEN_KEY: &str = "trincashop_admin_token";
/// Storage key for the optional refresh token
pub const REFRESH_TOKEN_KEY: &str = "trincashop_refresh_token";
/// Storage key for the cached admin profile
pub const USER_KEY: &str = "trincashop_admin_user";

/// Cached admin profile, stored as serialized JSON under [`USER_KEY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

/// Persistent key/value storage for the admin session.
///
/// Pure storage: no expiry is enforced at this layer. `clear` never
/// fails and removing absent keys is a no-op.
pub trait SessionStore: Send + Sync {
    /// Write all three session entries, overwriting prior values
    fn save(&self, token: &str, refresh_token: Option<&str>, user: &StoredUser);

    /// Remove all three entries unconditionally
    fn clear(&self);

    fn token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    /// Stored profile, or `None` when the key is absent or the stored
    /// value no longer deserializes
    fn user(&self) -> Option<StoredUser>;
}

fn entries_for(token: &str, refresh_token: Option<&str>, user: &StoredUser) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    entries.insert(TOKEN_KEY.to_string(), token.to_string());
    if let Some(refresh) = refresh_token {
        entries.insert(REFRESH_TOKEN_KEY.to_string(), refresh.to_string());
    }
    if let Ok(serialized) = serde_json::to_string(user) {
        entries.insert(USER_KEY.to_string(), serialized);
    }
    entries
}

fn user_from(raw: Option<String>) -> Option<StoredUser> {
    raw.and_then(|value| serde_json::from_str(&value).ok())
}

/// File-backed session store, the persistent-browser-storage analog.
///
/// The file is a flat JSON object holding the three session keys. I/O
/// failures are logged and swallowed; reads fall back to an empty map.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> HashMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => HashMap::new(),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!("Failed to create session directory: {}", e);
                    return;
                }
            }
        }
        match serde_json::to_string_pretty(entries) {
            Ok(content) => {
                if let Err(e) = fs::write(&self.path, content) {
                    tracing::warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str, refresh_token: Option<&str>, user: &StoredUser) {
        self.persist(&entries_for(token, refresh_token, user));
    }

    fn clear(&self) {
        self.persist(&HashMap::new());
    }

    fn token(&self) -> Option<String> {
        self.load().get(TOKEN_KEY).cloned()
    }

    fn refresh_token(&self) -> Option<String> {
        self.load().get(REFRESH_TOKEN_KEY).cloned()
    }

    fn user(&self) -> Option<StoredUser> {
        user_from(self.load().get(USER_KEY).cloned())
    }
}

/// In-memory session store for tests and throwaway sessions
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Seed a raw entry, bypassing the save contract (test hook)
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.write().insert(key.to_string(), value.to_string());
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str, refresh_token: Option<&str>, user: &StoredUser) {
        *self.write() = entries_for(token, refresh_token, user);
    }

    fn clear(&self) {
        self.write().clear();
    }

    fn token(&self) -> Option<String> {
        self.read().get(TOKEN_KEY).cloned()
    }

    fn refresh_token(&self) -> Option<String> {
        self.read().get(REFRESH_TOKEN_KEY).cloned()
    }

    fn user(&self) -> Option<StoredUser> {
        user_from(self.read().get(USER_KEY).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> StoredUser {
        StoredUser {
            name: "Administrador Trinca".to_string(),
            email: "admin@trincashop.com".to_string(),
        }
    }

    #[test]
    fn test_save_and_read_back() {
        let store = MemorySessionStore::new();
        store.save("tok", Some("refresh"), &sample_user());

        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh"));
        assert_eq!(store.user(), Some(sample_user()));
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let store = MemorySessionStore::new();
        store.save("first", Some("r1"), &sample_user());
        store.save(
            "second",
            None,
            &StoredUser {
                name: "Outra Pessoa".to_string(),
                email: "outra@trincashop.com".to_string(),
            },
        );

        assert_eq!(store.token().as_deref(), Some("second"));
        // The refresh token from the first session must not leak through
        assert_eq!(store.refresh_token(), None);
        assert_eq!(store.user().unwrap().email, "outra@trincashop.com");
    }

    #[test]
    fn test_clear_is_unconditional_and_idempotent() {
        let store = MemorySessionStore::new();
        store.clear();
        store.save("tok", None, &sample_user());
        store.clear();
        store.clear();

        assert_eq!(store.token(), None);
        assert_eq!(store.refresh_token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_corrupt_profile_reads_as_absent() {
        let store = MemorySessionStore::new();
        store.insert_raw(USER_KEY, "{not json");
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.save("tok", Some("refresh"), &sample_user());

        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.user(), Some(sample_user()));

        store.clear();
        assert_eq!(store.token(), None);
        assert_eq!(store.refresh_token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("never-written.json"));
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
    }
}
