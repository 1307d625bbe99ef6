use crate::error::{Result, UrlshError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CODE_LENGTH: usize = 4;
const DEFAULT_TITLE_MAX_LENGTH: usize = 60;
const DEFAULT_CLEANUP_DAYS: u32 = 30;
const MAX_CODE_LENGTH: usize = 20;
const MAX_CLEANUP_DAYS: usize = 36_500;

/// Tunable defaults, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlshConfig {
    /// Length of freshly generated codes before the store grows large
    #[serde(default = "default_code_length")]
    pub default_code_length: usize,

    /// Cached titles longer than this are cut and marked with "..."
    #[serde(default = "default_title_max_length")]
    pub title_max_length: usize,

    /// `clean` removes never-clicked links older than this many days
    #[serde(default = "default_cleanup_days")]
    pub cleanup_days: u32,
}

fn default_code_length() -> usize {
    DEFAULT_CODE_LENGTH
}

fn default_title_max_length() -> usize {
    DEFAULT_TITLE_MAX_LENGTH
}

fn default_cleanup_days() -> u32 {
    DEFAULT_CLEANUP_DAYS
}

impl Default for UrlshConfig {
    fn default() -> Self {
        Self {
            default_code_length: DEFAULT_CODE_LENGTH,
            title_max_length: DEFAULT_TITLE_MAX_LENGTH,
            cleanup_days: DEFAULT_CLEANUP_DAYS,
        }
    }
}

/// Config keys as spelled on the command line.
pub const KEYS: &[&str] = &["default-code-length", "title-max-length", "cleanup-days"];

impl UrlshConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: UrlshConfig = serde_json::from_str(&content)?;
        Ok(config.sanitized())
    }

    /// Hand-edited files can hold values `set` would refuse; those fall back to defaults.
    fn sanitized(mut self) -> Self {
        if let Err(e) = check_value("default-code-length", self.default_code_length) {
            warn!("{}; using {}", e, DEFAULT_CODE_LENGTH);
            self.default_code_length = DEFAULT_CODE_LENGTH;
        }
        if let Err(e) = check_value("title-max-length", self.title_max_length) {
            warn!("{}; using {}", e, DEFAULT_TITLE_MAX_LENGTH);
            self.title_max_length = DEFAULT_TITLE_MAX_LENGTH;
        }
        if let Err(e) = check_value("cleanup-days", self.cleanup_days as usize) {
            warn!("{}; using {}", e, DEFAULT_CLEANUP_DAYS);
            self.cleanup_days = DEFAULT_CLEANUP_DAYS;
        }
        self
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-code-length" => Ok(self.default_code_length.to_string()),
            "title-max-length" => Ok(self.title_max_length.to_string()),
            "cleanup-days" => Ok(self.cleanup_days.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let n: usize = value.parse().map_err(|_| not_positive(key, value))?;
        check_value(key, n)?;

        match key {
            "default-code-length" => self.default_code_length = n,
            "title-max-length" => self.title_max_length = n,
            "cleanup-days" => {
                self.cleanup_days = u32::try_from(n).map_err(|_| not_positive(key, value))?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }
}

/// Largest accepted value for `key`; `None` means unbounded.
fn upper_bound(key: &str) -> Result<Option<usize>> {
    match key {
        "default-code-length" => Ok(Some(MAX_CODE_LENGTH)),
        "title-max-length" => Ok(None),
        "cleanup-days" => Ok(Some(MAX_CLEANUP_DAYS)),
        other => Err(unknown_key(other)),
    }
}

fn check_value(key: &str, n: usize) -> Result<()> {
    if n == 0 {
        return Err(not_positive(key, n));
    }
    match upper_bound(key)? {
        Some(max) if n > max => {
            let msg = format!("{} must be at most {}, got {}", key, max, n);
            Err(UrlshError::Config(msg))
        }
        _ => Ok(()),
    }
}

fn not_positive(key: &str, value: impl Display) -> UrlshError {
    let msg = format!("{} must be a positive integer, got '{}'", key, value);
    UrlshError::Config(msg)
}

fn unknown_key(key: &str) -> UrlshError {
    UrlshError::Config(format!(
        "unknown config key '{}' (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = UrlshConfig::default();
        assert_eq!(config.default_code_length, 4);
        assert_eq!(config.title_max_length, 60);
        assert_eq!(config.cleanup_days, 30);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = UrlshConfig::load(dir.path()).unwrap();
        assert_eq!(config, UrlshConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"cleanup_days": 7}"#).unwrap();

        let config = UrlshConfig::load(dir.path()).unwrap();
        assert_eq!(config.cleanup_days, 7);
        assert_eq!(config.default_code_length, 4);
        assert_eq!(config.title_max_length, 60);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(UrlshConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut config = UrlshConfig::default();
        config.set("default-code-length", "6").unwrap();
        config.save(&nested).unwrap();

        let loaded = UrlshConfig::load(&nested).unwrap();
        assert_eq!(loaded.default_code_length, 6);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = UrlshConfig::default();
        assert!(config.set("cleanup-days", "0").is_err());
        assert!(config.set("cleanup-days", "soon").is_err());
        assert!(config.set("default-code-length", "21").is_err());
        assert!(config.set("colour", "1").is_err());
        assert_eq!(config, UrlshConfig::default());
    }

    #[test]
    fn test_cleanup_days_is_bounded() {
        let mut config = UrlshConfig::default();
        assert!(config.set("cleanup-days", "100000000").is_err());
        assert!(config.set("cleanup-days", "36501").is_err());
        assert_eq!(config.cleanup_days, 30);

        config.set("cleanup-days", "36500").unwrap();
        assert_eq!(config.cleanup_days, 36_500);
    }

    #[test]
    fn test_out_of_range_file_values_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"default_code_length": 0, "title_max_length": 0, "cleanup_days": 100000000}"#,
        )
        .unwrap();

        let config = UrlshConfig::load(dir.path()).unwrap();
        assert_eq!(config, UrlshConfig::default());
    }

    #[test]
    fn test_only_bad_fields_are_reset() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"default_code_length": 25, "cleanup_days": 7}"#,
        )
        .unwrap();

        let config = UrlshConfig::load(dir.path()).unwrap();
        assert_eq!(config.default_code_length, 4);
        assert_eq!(config.cleanup_days, 7);
    }

    #[test]
    fn test_entries_in_key_order() {
        let config = UrlshConfig::default();
        let keys: Vec<_> = config.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, KEYS);
    }
}
