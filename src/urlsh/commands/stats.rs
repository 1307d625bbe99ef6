use crate::commands::CmdResult;
use crate::model::Store;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub total_urls: usize,
    pub total_clicks: u64,
    /// `None` for an empty store.
    pub average_clicks: Option<f64>,
    /// Code and clicks of the most clicked entry; ties go to the lowest code.
    pub most_clicked: Option<(String, u64)>,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

pub fn compute(store: &Store) -> StatsReport {
    let total_urls = store.len();
    let total_clicks: u64 = store.items.values().map(|e| e.clicks).sum();

    let mut most_clicked: Option<(&String, u64)> = None;
    // `items` iterates in code order, so a strict comparison keeps the lowest code on ties.
    for (code, entry) in &store.items {
        if most_clicked.is_none_or(|(_, best)| entry.clicks > best) {
            most_clicked = Some((code, entry.clicks));
        }
    }

    StatsReport {
        total_urls,
        total_clicks,
        average_clicks: (total_urls > 0).then(|| total_clicks as f64 / total_urls as f64),
        most_clicked: most_clicked.map(|(code, clicks)| (code.clone(), clicks)),
        oldest: store.items.values().map(|e| e.created_at).min(),
        newest: store.items.values().map(|e| e.created_at).max(),
    }
}

pub fn run(store: &Store) -> CmdResult {
    CmdResult::default().with_stats(compute(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{days_ago, entry, store_from};

    #[test]
    fn empty_store_has_no_averages_or_extremes() {
        let report = compute(&Store::new());
        assert_eq!(report.total_urls, 0);
        assert_eq!(report.total_clicks, 0);
        assert_eq!(report.average_clicks, None);
        assert_eq!(report.most_clicked, None);
        assert_eq!(report.oldest, None);
        assert_eq!(report.newest, None);
    }

    #[test]
    fn aggregates_over_all_entries() {
        let store = store_from(vec![
            ("aaa", entry("https://a.example", days_ago(9), 1)),
            ("bbb", entry("https://b.example", days_ago(2), 6)),
            ("ccc", entry("https://c.example", days_ago(4), 0)),
        ]);

        let report = compute(&store);
        assert_eq!(report.total_urls, 3);
        assert_eq!(report.total_clicks, 7);
        assert_eq!(report.average_clicks, Some(7.0 / 3.0));
        assert_eq!(report.most_clicked, Some(("bbb".to_string(), 6)));
        assert_eq!(report.oldest, Some(days_ago(9)));
        assert_eq!(report.newest, Some(days_ago(2)));
    }

    #[test]
    fn most_clicked_tie_goes_to_lowest_code() {
        let store = store_from(vec![
            ("mmm", entry("https://a.example", days_ago(1), 4)),
            ("bbb", entry("https://b.example", days_ago(1), 4)),
            ("zzz", entry("https://c.example", days_ago(1), 4)),
        ]);

        assert_eq!(compute(&store).most_clicked, Some(("bbb".to_string(), 4)));
    }

    #[test]
    fn run_does_not_mark_changes() {
        let result = run(&Store::new());
        assert!(result.stats.is_some());
        assert!(!result.changed);
    }
}
