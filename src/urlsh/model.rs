use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One shortened URL. The code it is filed under is the key in [`Store::items`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_click: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn new(url: String, title: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            url,
            created_at: now,
            clicks: 0,
            title: title.filter(|t| !t.is_empty()),
            last_click: None,
        }
    }

    pub fn record_click(&mut self, now: DateTime<Utc>) {
        self.clicks += 1;
        self.last_click = Some(now);
    }
}

/// Cached projection of `items`, only meaningful right after a save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub total_urls: usize,
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub items: BTreeMap<String, Entry>,
    #[serde(default)]
    pub stats: Stats,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.items.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&Entry> {
        self.items.get(code)
    }

    /// Exact, byte-for-byte match on the stored URL.
    pub fn find_by_url(&self, url: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(_, entry)| entry.url == url)
            .map(|(code, _)| code.as_str())
    }

    pub fn refresh_stats(&mut self) {
        self.stats = Stats {
            total_clicks: self.items.values().map(|e| e.clicks).sum(),
            total_urls: self.items.len(),
        };
    }

    pub fn link(&self, code: &str) -> Option<Link> {
        self.items.get(code).map(|entry| Link {
            code: code.to_string(),
            entry: entry.clone(),
        })
    }
}

/// A code together with its entry, as handed to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub entry: Entry,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn new_entry_drops_empty_title() {
        let entry = Entry::new("https://a.example".into(), Some(String::new()), at(0));
        assert_eq!(entry.title, None);
        assert_eq!(entry.clicks, 0);
        assert_eq!(entry.last_click, None);
    }

    #[test]
    fn refresh_stats_sums_clicks() {
        let mut store = Store::new();
        let mut a = Entry::new("https://a.example".into(), None, at(0));
        a.clicks = 3;
        let mut b = Entry::new("https://b.example".into(), None, at(0));
        b.clicks = 4;
        store.items.insert("aaaa".into(), a);
        store.items.insert("bbbb".into(), b);

        store.refresh_stats();
        assert_eq!(store.stats.total_urls, 2);
        assert_eq!(store.stats.total_clicks, 7);
    }

    #[test]
    fn find_by_url_is_exact() {
        let mut store = Store::new();
        store.items.insert(
            "abcd".into(),
            Entry::new("https://a.example/".into(), None, at(0)),
        );
        assert_eq!(store.find_by_url("https://a.example/"), Some("abcd"));
        assert_eq!(store.find_by_url("https://a.example"), None);
        assert_eq!(store.find_by_url("HTTPS://a.example/"), None);
    }

    #[test]
    fn document_shape_matches_file_format() {
        let mut store = Store::new();
        store.items.insert(
            "abcd".into(),
            Entry::new("https://a.example".into(), None, at(0)),
        );
        store.refresh_stats();

        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value["items"]["abcd"]["url"], "https://a.example");
        assert_eq!(value["items"]["abcd"]["clicks"], 0);
        assert!(value["items"]["abcd"].get("title").is_none());
        assert!(value["items"]["abcd"].get("last_click").is_none());
        assert_eq!(value["stats"]["total_urls"], 1);
        assert_eq!(value["stats"]["total_clicks"], 0);
    }
}
