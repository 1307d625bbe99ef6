use super::DataStore;
use crate::error::{Result, UrlshError};
use crate::model::Store;

/// In-memory storage for testing and development.
/// Keeps the last saved document as JSON so the serde path is exercised.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<String>,
    saves: usize,
    read_only: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out holding `store` as if it had been saved earlier.
    pub fn with_store(mut store: Store) -> Result<Self> {
        store.refresh_stats();
        Ok(Self {
            saved: Some(serde_json::to_string(&store)?),
            ..Self::default()
        })
    }

    /// Every save fails, like a file on a read-only disk.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn raw(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Store {
        self.saved
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, store: &mut Store) -> Result<()> {
        store.refresh_stats();
        if self.read_only {
            return Err(UrlshError::Store("store is read-only".to_string()));
        }
        self.saved = Some(serde_json::to_string(store)?);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Entry, Store};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    pub fn days_ago(days: i64) -> DateTime<Utc> {
        fixed_now() - Duration::days(days)
    }

    /// A store holding `count` entries with codes `f00000`, `f00001`, ...
    pub fn store_with_links(count: usize) -> Store {
        let mut store = Store::new();
        for i in 0..count {
            store.items.insert(
                format!("f{:05}", i),
                Entry::new(format!("https://example.com/{}", i), None, days_ago(1)),
            );
        }
        store
    }

    /// A store holding exactly the given `(code, entry)` pairs.
    pub fn store_from(links: Vec<(&str, Entry)>) -> Store {
        let mut store = Store::new();
        for (code, entry) in links {
            store.items.insert(code.to_string(), entry);
        }
        store
    }

    pub fn entry(url: &str, created_at: DateTime<Utc>, clicks: u64) -> Entry {
        let mut entry = Entry::new(url.to_string(), None, created_at);
        entry.clicks = clicks;
        entry
    }
}
