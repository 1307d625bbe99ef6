use super::DataStore;
use crate::error::{Result, UrlshError};
use crate::model::Store;
use chrono::Datelike;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const STORE_FILENAME: &str = "urls.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store backed by `<dir>/urls.json`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(STORE_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn try_load(&self) -> Result<Store> {
        let content = fs::read_to_string(&self.path)?;
        let mut store: Store = serde_json::from_str(&content)?;

        // Files from older versions wrote the zero instant for "never clicked".
        for entry in store.items.values_mut() {
            if entry.last_click.is_some_and(|t| t.year() <= 1) {
                entry.last_click = None;
            }
        }
        Ok(store)
    }

    fn write(&self, content: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Store {
        match self.try_load() {
            Ok(store) => {
                debug!("{} entries in {}", store.len(), self.path.display());
                store
            }
            Err(UrlshError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("no store at {}, starting empty", self.path.display());
                Store::new()
            }
            Err(e) => {
                warn!(
                    "could not read store at {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                Store::new()
            }
        }
    }

    fn save(&mut self, store: &mut Store) -> Result<()> {
        store.refresh_stats();
        let content = serde_json::to_string_pretty(store)?;
        self.write(&content).map_err(|e| {
            UrlshError::Store(format!("could not write {}: {}", self.path.display(), e))
        })?;
        debug!("saved {} to {}", store.len(), self.path.display());
        Ok(())
    }
}
