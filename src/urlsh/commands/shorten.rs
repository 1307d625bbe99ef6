//! Code assignment.
//!
//! Order of checks for `assign(store, url, custom)`:
//!
//! 1. The URL must be an absolute `http`/`https` URL.
//! 2. If some entry already stores exactly this URL, its code is returned and
//!    nothing is created. This runs before the custom code is looked at.
//! 3. A custom code must pass [`validate_custom_code`] and be unused. There is
//!    no retry for custom codes.
//! 4. Otherwise a code is minted. The starting length depends on the store size
//!    at call time; within the call, every [`COLLISIONS_BEFORE_GROWTH`]
//!    consecutive collisions grow the length by one.

use crate::codegen::CodeGenerator;
use crate::commands::CmdResult;
use crate::config::UrlshConfig;
use crate::error::{Result, UrlshError};
use crate::model::{Entry, Store};
use crate::title::TitleFetcher;
use crate::validate::{is_valid_url, validate_custom_code};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Stores larger than this mint codes of at least 5 characters.
pub const MEDIUM_STORE: usize = 1_000;
/// Stores larger than this mint codes of at least 6 characters.
pub const LARGE_STORE: usize = 10_000;
pub const COLLISIONS_BEFORE_GROWTH: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignPolicy {
    pub default_length: usize,
    pub title_max_length: usize,
}

impl Default for AssignPolicy {
    fn default() -> Self {
        Self::from(&UrlshConfig::default())
    }
}

impl From<&UrlshConfig> for AssignPolicy {
    fn from(config: &UrlshConfig) -> Self {
        Self {
            default_length: config.default_code_length,
            title_max_length: config.title_max_length,
        }
    }
}

impl AssignPolicy {
    /// Length of the first draw for a store holding `store_len` entries.
    pub fn initial_length(&self, store_len: usize) -> usize {
        if store_len > LARGE_STORE {
            self.default_length.max(6)
        } else if store_len > MEDIUM_STORE {
            self.default_length.max(5)
        } else {
            self.default_length
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub code: String,
    /// False when the URL was already stored and its code was reused.
    pub created: bool,
}

pub fn assign(
    store: &mut Store,
    url: &str,
    custom: Option<&str>,
    generator: &mut dyn CodeGenerator,
    titles: &dyn TitleFetcher,
    policy: &AssignPolicy,
    now: DateTime<Utc>,
) -> Result<Assignment> {
    if !is_valid_url(url) {
        return Err(UrlshError::InvalidUrl(url.to_string()));
    }

    if let Some(existing) = store.find_by_url(url) {
        return Ok(Assignment {
            code: existing.to_string(),
            created: false,
        });
    }

    let code = match custom {
        Some(code) => {
            validate_custom_code(code)?;
            if store.contains(code) {
                return Err(UrlshError::CodeTaken(code.to_string()));
            }
            code.to_string()
        }
        None => mint(store, url, generator, policy.initial_length(store.len()))?,
    };

    let title = titles.fetch_title(url, policy.title_max_length);
    let entry = Entry::new(url.to_string(), Some(title), now);
    store.items.insert(code.clone(), entry);

    Ok(Assignment {
        code,
        created: true,
    })
}

fn mint(
    store: &Store,
    url: &str,
    generator: &mut dyn CodeGenerator,
    mut length: usize,
) -> Result<String> {
    let mut collisions = 0;
    loop {
        let candidate = generator.generate(url, length)?;
        if !store.contains(&candidate) {
            return Ok(candidate);
        }
        collisions += 1;
        if collisions == COLLISIONS_BEFORE_GROWTH {
            length += 1;
            collisions = 0;
            debug!(
                "{} collisions in a row, growing codes to {}",
                COLLISIONS_BEFORE_GROWTH, length
            );
        }
    }
}

pub fn run(
    store: &mut Store,
    url: &str,
    custom: Option<&str>,
    generator: &mut dyn CodeGenerator,
    titles: &dyn TitleFetcher,
    policy: &AssignPolicy,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let assignment = assign(store, url, custom, generator, titles, policy, now)?;

    let mut result = CmdResult::default();
    if let Some(link) = store.link(&assignment.code) {
        result.affected_links.push(link);
    }
    if assignment.created {
        result.mark_changed();
    }
    result.assignment = Some(assignment);
    Ok(result)
}
