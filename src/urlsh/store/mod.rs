//! # Storage Layer
//!
//! The [`DataStore`] trait moves a whole [`Store`] document between memory and
//! its backing medium. There is no incremental update: every save rewrites the
//! full document.
//!
//! ## Contract
//!
//! - `load` never fails. A missing, unreadable or unparsable backing file comes
//!   back as an empty `Store`; the cause is logged.
//! - `save` recomputes `stats` from `items` and then persists. It reports write
//!   failures, and callers decide whether that matters.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single JSON file, replaced
//!   atomically (write to a temp file, then rename)
//! - [`memory::InMemoryStore`]: Keeps the serialised document in memory for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── urls.json     # {"items": {code: entry, ...}, "stats": {...}}
//! └── config.json   # optional tunables
//! ```

use crate::error::Result;
use crate::model::Store;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the whole document, falling back to an empty one.
    fn load(&self) -> Store;

    /// Refresh `stats` and overwrite the persisted document.
    fn save(&mut self, store: &mut Store) -> Result<()>;
}
