use crate::commands::CmdResult;
use crate::error::{Result, UrlshError};
use crate::model::Store;
use chrono::{DateTime, Utc};

/// Resolve `code` and record one click on it.
pub fn run(store: &mut Store, code: &str, now: DateTime<Utc>) -> Result<CmdResult> {
    let entry = store
        .items
        .get_mut(code)
        .ok_or_else(|| UrlshError::NotFound(code.to_string()))?;
    entry.record_click(now);

    let mut result = CmdResult::default();
    if let Some(link) = store.link(code) {
        result.affected_links.push(link);
    }
    result.mark_changed();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{days_ago, entry, fixed_now};

    fn store() -> Store {
        let mut store = Store::new();
        store
            .items
            .insert("abcd".into(), entry("https://example.com", days_ago(3), 0));
        store
    }

    #[test]
    fn increments_clicks_and_sets_last_click() {
        let mut store = store();
        let result = run(&mut store, "abcd", fixed_now()).unwrap();

        let link = &result.affected_links[0];
        assert_eq!(link.code, "abcd");
        assert_eq!(link.entry.url, "https://example.com");
        assert_eq!(link.entry.clicks, 1);
        assert_eq!(link.entry.last_click, Some(fixed_now()));
        assert!(result.changed);
    }

    #[test]
    fn each_expand_adds_exactly_one() {
        let mut store = store();
        run(&mut store, "abcd", days_ago(2)).unwrap();
        run(&mut store, "abcd", days_ago(1)).unwrap();
        run(&mut store, "abcd", fixed_now()).unwrap();

        let entry = store.get("abcd").unwrap();
        assert_eq!(entry.clicks, 3);
        assert_eq!(entry.last_click, Some(fixed_now()));
        assert_eq!(entry.created_at, days_ago(3));
    }

    #[test]
    fn unknown_code_is_not_found_and_leaves_store_alone() {
        let mut store = store();
        let before = store.clone();

        let err = run(&mut store, "zzzz", fixed_now()).unwrap_err();
        assert!(matches!(err, UrlshError::NotFound(ref c) if c == "zzzz"));
        assert_eq!(store, before);
    }
}
