use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use urlsh::api::{CmdMessage, CmdResult, MessageLevel, StatsReport};
use urlsh::config::UrlshConfig;
use urlsh::model::Link;

const LINE_WIDTH: usize = 100;
const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = LINE_WIDTH - LABEL_WIDTH;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// The code goes out on its own line, uncoloured, so `$(urlsh s URL)` captures it.
pub(super) fn render_shortened(result: &CmdResult) {
    let Some(assignment) = &result.assignment else {
        return;
    };
    if assignment.created {
        println!("{}", assignment.code);
    } else {
        println!("{} {}", assignment.code, "(exists)".dimmed());
    }
    if let Some(title) = result
        .affected_links
        .first()
        .and_then(|l| l.entry.title.as_deref())
    {
        println!("Title: {}", title);
    }
}

pub(super) fn render_expanded(links: &[Link]) {
    for link in links {
        println!("{}", link.entry.url);
        if let Some(title) = &link.entry.title {
            println!("Title: {}", title);
        }
        println!("Clicks: {}", link.entry.clicks);
    }
}

pub(super) fn render_list(links: &[Link]) {
    if links.is_empty() {
        println!("No URLs stored");
        return;
    }

    println!("Stored URLs ({} total):", links.len());
    for link in links {
        println!();
        for line in link_lines(link, Utc::now()) {
            println!("{}", line);
        }
    }
}

fn link_lines(link: &Link, now: DateTime<Utc>) -> Vec<String> {
    let entry = &link.entry;
    let mut lines = vec![
        field("Code", &link.code.bold().to_string()),
        field("URL", &truncate_to_width(&entry.url, VALUE_WIDTH)),
    ];
    if let Some(title) = &entry.title {
        lines.push(field("Title", &truncate_to_width(title, VALUE_WIDTH)));
    }
    lines.push(field(
        "Created",
        &format!(
            "{} {}",
            format_timestamp(entry.created_at),
            format!("({})", format_time_ago(entry.created_at, now)).dimmed()
        ),
    ));
    lines.push(field("Clicks", &entry.clicks.to_string()));
    if let Some(last) = entry.last_click {
        lines.push(field(
            "Last clicked",
            &format!(
                "{} {}",
                format_timestamp(last),
                format!("({})", format_time_ago(last, now)).dimmed()
            ),
        ));
    }
    lines
}

pub(super) fn render_stats(stats: &StatsReport) {
    for line in stats_lines(stats) {
        println!("{}", line);
    }
}

fn stats_lines(stats: &StatsReport) -> Vec<String> {
    let mut lines = vec![
        "URL Shortener Statistics".to_string(),
        "========================".to_string(),
        format!("Total URLs: {}", stats.total_urls),
        format!("Total clicks: {}", stats.total_clicks),
    ];
    if let Some(avg) = stats.average_clicks {
        lines.push(format!("Average clicks per URL: {:.1}", avg));
    }
    if let Some((code, clicks)) = &stats.most_clicked {
        lines.push(format!("Most clicked: {} ({} clicks)", code, clicks));
    }
    if let Some(oldest) = stats.oldest {
        lines.push(format!("Oldest URL: {}", format_timestamp(oldest)));
    }
    if let Some(newest) = stats.newest {
        lines.push(format!("Newest URL: {}", format_timestamp(newest)));
    }
    lines
}

pub(super) fn render_config(config: &UrlshConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn field(label: &str, value: &str) -> String {
    let label = format!("{}:", label);
    format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
