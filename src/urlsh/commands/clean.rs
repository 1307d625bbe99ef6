use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Link, Store};
use chrono::{DateTime, Duration, Utc};

/// Links that `run` would remove: never clicked and created before `now - window_days`.
pub fn stale_links(store: &Store, window_days: u32, now: DateTime<Utc>) -> Vec<Link> {
    // A window reaching back past the earliest representable instant covers no entry.
    let cutoff = Duration::try_days(i64::from(window_days))
        .and_then(|window| now.checked_sub_signed(window));
    let Some(cutoff) = cutoff else {
        return Vec::new();
    };
    store
        .items
        .iter()
        .filter(|(_, entry)| entry.clicks == 0 && entry.created_at < cutoff)
        .map(|(code, entry)| Link {
            code: code.clone(),
            entry: entry.clone(),
        })
        .collect()
}

pub fn run(store: &mut Store, window_days: u32, now: DateTime<Utc>) -> CmdResult {
    let stale = stale_links(store, window_days, now);
    for link in &stale {
        store.items.remove(&link.code);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} unused URLs",
        stale.len()
    )));
    if !stale.is_empty() {
        result.mark_changed();
    }
    result.with_affected_links(stale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{days_ago, entry, fixed_now, store_from};

    #[test]
    fn removes_only_old_unclicked_entries() {
        let mut store = store_from(vec![
            ("old0", entry("https://a.example", days_ago(31), 0)),
            ("new0", entry("https://b.example", days_ago(29), 0)),
            ("old5", entry("https://c.example", days_ago(40), 5)),
        ]);

        let result = run(&mut store, 30, fixed_now());

        assert_eq!(result.affected_links.len(), 1);
        assert_eq!(result.affected_links[0].code, "old0");
        assert!(result.changed);
        assert!(!store.contains("old0"));
        assert!(store.contains("new0"));
        assert!(store.contains("old5"));
        assert_eq!(result.messages[0].content, "Removed 1 unused URLs");
    }

    #[test]
    fn entry_exactly_at_the_cutoff_is_kept() {
        let edge = entry("https://a.example", days_ago(30), 0);
        let mut store = store_from(vec![("edge", edge)]);

        let result = run(&mut store, 30, fixed_now());
        assert!(result.affected_links.is_empty());
        assert!(store.contains("edge"));
    }

    #[test]
    fn window_is_configurable() {
        let week = entry("https://a.example", days_ago(8), 0);
        let mut store = store_from(vec![("week", week)]);

        assert!(run(&mut store, 30, fixed_now()).affected_links.is_empty());
        assert_eq!(run(&mut store, 7, fixed_now()).affected_links.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn window_beyond_the_calendar_removes_nothing() {
        let old = entry("https://a.example", days_ago(400), 0);
        let mut store = store_from(vec![("old0", old)]);

        let result = run(&mut store, u32::MAX, fixed_now());
        assert!(result.affected_links.is_empty());
        assert!(!result.changed);
        assert!(store.contains("old0"));
    }

    #[test]
    fn nothing_to_remove_is_not_a_change() {
        let mut store = Store::new();
        let result = run(&mut store, 30, fixed_now());
        assert!(!result.changed);
        assert_eq!(result.messages[0].content, "Removed 0 unused URLs");
    }
}
