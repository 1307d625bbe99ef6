use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UrlshError};
use crate::model::{Link, Store};

pub fn run(store: &mut Store, code: &str) -> Result<CmdResult> {
    let entry = store
        .items
        .remove(code)
        .ok_or_else(|| UrlshError::NotFound(code.to_string()))?;

    let mut result = CmdResult::default().with_affected_links(vec![Link {
        code: code.to_string(),
        entry,
    }]);
    result.add_message(CmdMessage::success(format!("Deleted {}", code)));
    result.mark_changed();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::expand;
    use crate::store::memory::fixtures::{days_ago, entry, fixed_now, store_from};

    #[test]
    fn removes_the_entry() {
        let mut store = store_from(vec![
            ("abcd", entry("https://a.example", days_ago(1), 3)),
            ("efgh", entry("https://b.example", days_ago(1), 0)),
        ]);

        let result = run(&mut store, "abcd").unwrap();
        assert!(result.changed);
        assert_eq!(result.affected_links[0].entry.url, "https://a.example");
        assert!(!store.contains("abcd"));
        assert!(store.contains("efgh"));

        store.refresh_stats();
        assert_eq!(store.stats.total_clicks, 0);
        assert_eq!(store.stats.total_urls, 1);
    }

    #[test]
    fn unknown_code_is_not_found() {
        let mut store = Store::new();
        let err = run(&mut store, "nope").unwrap_err();
        assert!(matches!(err, UrlshError::NotFound(_)));
    }

    #[test]
    fn deleted_code_can_no_longer_be_expanded() {
        let link = entry("https://a.example", days_ago(1), 0);
        let mut store = store_from(vec![("abcd", link)]);
        run(&mut store, "abcd").unwrap();
        assert!(expand::run(&mut store, "abcd", fixed_now()).is_err());
    }
}
