//! # Command Layer
//!
//! One module per operation. Every `run` takes the loaded [`Store`] as an
//! explicit value and returns a [`CmdResult`]; none of them touch the
//! filesystem. Persisting is the API's job, and it only happens when
//! [`CmdResult::changed`] is set.
//!
//! [`Store`]: crate::model::Store

use crate::config::UrlshConfig;
use crate::model::Link;

pub mod clean;
pub mod config;
pub mod delete;
pub mod expand;
pub mod list;
pub mod shorten;
pub mod stats;

pub use shorten::{AssignPolicy, Assignment};
pub use stats::StatsReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub assignment: Option<Assignment>,
    pub affected_links: Vec<Link>,
    pub listed_links: Vec<Link>,
    pub stats: Option<StatsReport>,
    pub config: Option<UrlshConfig>,
    pub messages: Vec<CmdMessage>,
    /// The store was mutated and must be saved.
    pub changed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    pub fn with_affected_links(mut self, links: Vec<Link>) -> Self {
        self.affected_links = links;
        self
    }

    pub fn with_listed_links(mut self, links: Vec<Link>) -> Self {
        self.listed_links = links;
        self
    }

    pub fn with_stats(mut self, stats: StatsReport) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: UrlshConfig) -> Self {
        self.config = Some(config);
        self
    }
}
