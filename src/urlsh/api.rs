//! # API Facade
//!
//! The single entry point for every urlsh operation, whatever UI drives it.
//!
//! Each method follows the same cycle:
//!
//! 1. `load` the whole [`Store`] from the backend (never fails)
//! 2. run exactly one command from [`commands`] against it
//! 3. `save` it back, but only if the command reported a change
//!
//! A failed save does not turn a successful operation into an error: the result
//! comes back with a warning message attached instead.
//!
//! ## Generic Over DataStore
//!
//! `UrlshApi<S: DataStore>` is generic over the storage backend:
//! - Production: `UrlshApi<FileStore>`
//! - Testing: `UrlshApi<InMemoryStore>`
//!
//! The code generator and title fetcher are boxed strategies so callers can
//! pick them at runtime (`--hash`, `--no-title`) and tests can script them.

use crate::codegen::{CodeGenerator, RandomCodes};
use crate::commands::{self, AssignPolicy};
use crate::config::UrlshConfig;
use crate::error::{Result, UrlshError};
use crate::model::{Link, Store};
use crate::store::DataStore;
use crate::title::{HttpTitleFetcher, TitleFetcher};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::warn;

pub struct UrlshApi<S: DataStore> {
    store: S,
    config: UrlshConfig,
    config_dir: PathBuf,
    generator: Box<dyn CodeGenerator>,
    titles: Box<dyn TitleFetcher>,
}

impl<S: DataStore> UrlshApi<S> {
    pub fn new(store: S, config: UrlshConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
            generator: Box::new(RandomCodes),
            titles: Box::new(HttpTitleFetcher),
        }
    }

    pub fn with_generator(mut self, generator: impl CodeGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn with_title_fetcher(mut self, titles: impl TitleFetcher + 'static) -> Self {
        self.titles = Box::new(titles);
        self
    }

    pub fn shorten(&mut self, url: &str, custom: Option<&str>) -> Result<CmdResult> {
        self.shorten_at(url, custom, Utc::now())
    }

    pub fn shorten_at(
        &mut self,
        url: &str,
        custom: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<CmdResult> {
        let mut doc = self.store.load();
        let policy = AssignPolicy::from(&self.config);
        let mut result = commands::shorten::run(
            &mut doc,
            url,
            custom,
            self.generator.as_mut(),
            self.titles.as_ref(),
            &policy,
            now,
        )?;
        self.persist(&mut doc, &mut result);
        Ok(result)
    }

    pub fn expand(&mut self, code: &str) -> Result<CmdResult> {
        self.expand_at(code, Utc::now())
    }

    pub fn expand_at(&mut self, code: &str, now: DateTime<Utc>) -> Result<CmdResult> {
        let mut doc = self.store.load();
        let mut result = commands::expand::run(&mut doc, code, now)?;
        self.persist(&mut doc, &mut result);
        Ok(result)
    }

    pub fn list(&self) -> Result<CmdResult> {
        Ok(commands::list::run(&self.store.load()))
    }

    pub fn stats(&self) -> Result<CmdResult> {
        Ok(commands::stats::run(&self.store.load()))
    }

    /// Read-only lookup; does not count as a click.
    pub fn lookup(&self, code: &str) -> Result<Link> {
        self.store
            .load()
            .link(code)
            .ok_or_else(|| UrlshError::NotFound(code.to_string()))
    }

    /// What `clean` would remove right now.
    pub fn stale_links(&self) -> Vec<Link> {
        commands::clean::stale_links(&self.store.load(), self.config.cleanup_days, Utc::now())
    }

    pub fn clean(&mut self) -> Result<CmdResult> {
        self.clean_at(Utc::now())
    }

    pub fn clean_at(&mut self, now: DateTime<Utc>) -> Result<CmdResult> {
        let mut doc = self.store.load();
        let mut result = commands::clean::run(&mut doc, self.config.cleanup_days, now);
        self.persist(&mut doc, &mut result);
        Ok(result)
    }

    pub fn delete(&mut self, code: &str) -> Result<CmdResult> {
        let mut doc = self.store.load();
        let mut result = commands::delete::run(&mut doc, code)?;
        self.persist(&mut doc, &mut result);
        Ok(result)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn settings(&self) -> &UrlshConfig {
        &self.config
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, doc: &mut Store, result: &mut CmdResult) {
        if !result.changed {
            return;
        }
        if let Err(e) = self.store.save(doc) {
            warn!("save failed: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "Changes were not saved: {}",
                e
            )));
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{Assignment, CmdMessage, CmdResult, MessageLevel, StatsReport};
