use crate::commands::CmdResult;
use crate::model::{Link, Store};

/// All links, newest first. Equal timestamps fall back to code order.
pub fn sorted_links(store: &Store) -> Vec<Link> {
    let mut links: Vec<Link> = store
        .items
        .iter()
        .map(|(code, entry)| Link {
            code: code.clone(),
            entry: entry.clone(),
        })
        .collect();
    links.sort_by(|a, b| {
        b.entry
            .created_at
            .cmp(&a.entry.created_at)
            .then_with(|| a.code.cmp(&b.code))
    });
    links
}

pub fn run(store: &Store) -> CmdResult {
    CmdResult::default().with_listed_links(sorted_links(store))
}
