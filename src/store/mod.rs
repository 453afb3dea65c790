pub mod seed;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Fixed storage keys, one per logical table. Kept from the original
/// deployment so an exported state dump stays readable.
pub const LEAVE_REQUESTS_KEY: &str = "leavePilotLeaveRequests";
pub const NOTIFICATIONS_KEY: &str = "leavePilotNotifications";
pub const SESSION_USERS_KEY: &str = "leavePilotSessionUsers";

/// Durable key/value storage for serialized collections. The services treat
/// it as a single shared resource with one active writer; writes replace the
/// whole value (last writer wins, no version token).
pub trait StateStore: Send + Sync {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// One JSON file per key under a data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn open(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("failed to read {}", path.display()))
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("failed to write {}", path.display()))
    }
}

/// Loads a collection from the store, falling back to the seed dataset when
/// the key is missing or its content no longer parses. The fallback is
/// persisted immediately so the next load sees well-formed data.
pub fn load_or_seed<T>(
    store: &dyn StateStore,
    key: &str,
    seed: impl FnOnce() -> Vec<T>,
) -> anyhow::Result<Vec<T>>
where
    T: Serialize + DeserializeOwned,
{
    let reseed = |store: &dyn StateStore| -> anyhow::Result<Vec<T>> {
        let seeded = seed();
        store.write(key, &serde_json::to_string(&seeded)?)?;
        Ok(seeded)
    };

    match store.read(key)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(key, error = %e, "Stored state is corrupt, reseeding");
                reseed(store)
            }
        },
        None => reseed(store),
    }
}

/// Injected time source so tests can pin `now`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// In-memory store for unit tests.
    #[derive(Default)]
    pub struct MemStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl StateStore for MemStore {
        fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Clock pinned to a fixed instant.
    pub struct FixedClock(pub DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        n: i32,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "a".into(),
                n: 1,
            },
            Row {
                id: "b".into(),
                n: 2,
            },
        ]
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        assert!(store.read("missing").unwrap().is_none());

        store.write("k", "[1,2,3]").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn load_seeds_when_key_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        let loaded: Vec<Row> = load_or_seed(&store, "rows", rows).unwrap();
        assert_eq!(loaded, rows());

        // Seed was persisted, so a second load parses the stored copy.
        let again: Vec<Row> = load_or_seed(&store, "rows", Vec::new).unwrap();
        assert_eq!(again, rows());
    }

    #[test]
    fn load_reseeds_on_corrupt_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        store.write("rows", "{not json").unwrap();
        let loaded: Vec<Row> = load_or_seed(&store, "rows", rows).unwrap();
        assert_eq!(loaded, rows());

        // The corrupt copy was overwritten in place.
        let raw = store.read("rows").unwrap().unwrap();
        let parsed: Vec<Row> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, rows());
    }
}
