//! Best-effort page titles.
//!
//! A title is fetched once, when a URL is first shortened. Failure of any kind
//! yields an empty string and never blocks assignment.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

const HTTP_TIMEOUT_SECS: u64 = 3;
/// Only the head of the body is scanned for a `<title>` tag.
const MAX_BODY_BYTES: u64 = 8192;
const ELLIPSIS: &str = "...";

static HTTP_AGENT: Lazy<Agent> = Lazy::new(|| {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
        .build()
        .into()
});

const TITLE_PATTERN: &str = r"(?i)<title[^>]*>([^<]+)</title>";

static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TITLE_PATTERN).expect("valid regex"));

pub trait TitleFetcher {
    /// Returns the page title truncated to `max_len` characters, or an empty string.
    fn fetch_title(&self, url: &str, max_len: usize) -> String;
}

/// Fetches titles over HTTP with a short global timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTitleFetcher;

impl HttpTitleFetcher {
    fn fetch_head(url: &str) -> Option<String> {
        let resp = match HTTP_AGENT.get(url).call() {
            Ok(r) => r,
            Err(e) => {
                debug!("title fetch for \"{}\" failed: {}", url, e);
                return None;
            }
        };

        let mut buf = Vec::with_capacity(MAX_BODY_BYTES as usize);
        if let Err(e) = resp
            .into_body()
            .into_reader()
            .take(MAX_BODY_BYTES)
            .read_to_end(&mut buf)
        {
            debug!("reading body of \"{}\" failed: {}", url, e);
            if buf.is_empty() {
                return None;
            }
        }
        Some(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl TitleFetcher for HttpTitleFetcher {
    fn fetch_title(&self, url: &str, max_len: usize) -> String {
        Self::fetch_head(url)
            .and_then(|html| extract_title(&html, max_len))
            .unwrap_or_default()
    }
}

/// Never fetches anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTitles;

impl TitleFetcher for NoTitles {
    fn fetch_title(&self, _url: &str, _max_len: usize) -> String {
        String::new()
    }
}

pub fn extract_title(html: &str, max_len: usize) -> Option<String> {
    let raw = TITLE_RE.captures(html)?.get(1)?.as_str();
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }
    Some(truncate_title(&collapsed, max_len))
}

pub fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() <= max_len {
        return title.to_string();
    }
    let mut out: String = title.chars().take(max_len).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_case_insensitively() {
        let html = "<html><HEAD><TITLE>  Rust Blog </TITLE></HEAD></html>";
        assert_eq!(extract_title(html, 60).as_deref(), Some("Rust Blog"));
    }

    #[test]
    fn extracts_title_with_attributes_and_newlines() {
        let html = "<title data-x=\"1\">\n  Hello\n  World\n</title>";
        assert_eq!(extract_title(html, 60).as_deref(), Some("Hello World"));
    }

    #[test]
    fn missing_or_blank_title_is_none() {
        assert_eq!(extract_title("<html><body>hi</body></html>", 60), None);
        assert_eq!(extract_title("<title>   </title>", 60), None);
    }

    #[test]
    fn truncates_long_titles_with_marker() {
        let long = "x".repeat(70);
        let t = truncate_title(&long, 60);
        assert_eq!(t.chars().count(), 63);
        assert!(t.ends_with("..."));
        assert_eq!(truncate_title("short", 60), "short");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let t = truncate_title("ééééé", 3);
        assert_eq!(t, "ééé...");
    }

    #[test]
    fn unreachable_host_yields_empty_title() {
        let title = HttpTitleFetcher.fetch_title("http://127.0.0.1:1/", 60);
        assert_eq!(title, "");
    }

    #[test]
    fn no_titles_is_always_empty() {
        assert_eq!(NoTitles.fetch_title("https://example.com", 60), "");
    }
}
