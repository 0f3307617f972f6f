//! JSON-file key-value store.

use crate::error::{Result, StateError};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key under which the lock flag is persisted.
pub const LOCKED_KEY: &str = "locked";

/// Durable key-value store over a single JSON object file.
///
/// Cheap to construct; every operation opens the file fresh, so the store
/// itself carries no cached state between calls. See the crate docs for the
/// durability and concurrency model.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by `path`. The file is created on first
    /// successful [`set`](Self::set).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole persisted object.
    ///
    /// Absent, unreadable, or unparseable files degrade to an empty object;
    /// the two latter cases are logged. This can never fail: reads of
    /// durable state must not brick the lock.
    fn load(&self) -> Map<String, Value> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Map::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "state file unreadable, treating as empty");
                return Map::new();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                warn!(
                    path = %self.path.display(),
                    found = json_type(&other),
                    "state file is not a JSON object, treating as empty"
                );
                Map::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "state file unparseable, treating as empty");
                Map::new()
            }
        }
    }

    /// Look up `key` in the persisted object.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::KeyNotFound`] if the key is absent (which
    /// includes the whole file being absent or unparseable).
    pub fn get(&self, key: &str) -> Result<Value> {
        self.load()
            .remove(key)
            .ok_or_else(|| StateError::key_not_found(key))
    }

    /// Set `key` to `value`, preserving every other key in the file.
    ///
    /// Read-modify-write of the whole object; the file is created if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Io`] if the file cannot be written.
    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut map = self.load();
        map.insert(key.to_string(), value);
        let serialized = serde_json::to_string(&Value::Object(map))?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }

    /// Whether the door is locked according to persisted state.
    ///
    /// An absent key (first run, or recovered-from-corruption file) is "not
    /// locked". A present value of any type other than boolean is an error:
    /// the store is the only writer of this key and always writes a
    /// boolean, so anything else means the file was tampered with, and
    /// guessing a lock state from a corrupt flag is worse than failing.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::TypeMismatch`] for a present non-boolean value.
    pub fn is_locked(&self) -> Result<bool> {
        match self.get(LOCKED_KEY) {
            Ok(Value::Bool(locked)) => Ok(locked),
            Ok(other) => Err(StateError::type_mismatch(
                LOCKED_KEY,
                "boolean",
                json_type(&other),
            )),
            Err(StateError::KeyNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Persist the lock flag.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Io`] if the file cannot be written.
    pub fn set_locked(&self, locked: bool) -> Result<()> {
        self.set(LOCKED_KEY, Value::Bool(locked))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> StateStore {
        StateStore::new(dir.path().join("state.json"))
    }

    #[test]
    fn test_missing_file_is_not_locked() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.is_locked().unwrap());
    }

    #[test]
    fn test_missing_key_is_distinct_from_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(matches!(
            store.get(LOCKED_KEY),
            Err(StateError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_lock_unlock_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for _ in 0..3 {
            store.set_locked(true).unwrap();
            assert!(store.is_locked().unwrap());
            store.set_locked(false).unwrap();
            assert!(!store.is_locked().unwrap());
        }
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"existing":"value"}"#).unwrap();

        store.set_locked(true).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let map: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(map["existing"], json!("value"));
        assert_eq!(map["locked"], json!(true));
    }

    #[test]
    fn test_unparseable_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(!store.is_locked().unwrap());

        // A write after recovery produces a clean file again.
        store.set_locked(true).unwrap();
        assert!(store.is_locked().unwrap());
    }

    #[test]
    fn test_non_object_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "[1, 2, 3]").unwrap();
        assert!(!store.is_locked().unwrap());
    }

    #[test]
    fn test_non_boolean_locked_fails_fast() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"locked":"yes"}"#).unwrap();

        match store.is_locked() {
            Err(StateError::TypeMismatch {
                key,
                expected,
                found,
            }) => {
                assert_eq!(key, "locked");
                assert_eq!(expected, "boolean");
                assert_eq!(found, "string");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_get_returns_stored_value_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set("note", json!("rear door")).unwrap();
        assert_eq!(store.get("note").unwrap(), json!("rear door"));
    }

    #[test]
    fn test_set_on_unwritable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("no_such_dir").join("state.json"));
        assert!(matches!(
            store.set_locked(true),
            Err(StateError::Io(_))
        ));
    }
}
