//! Typed key/value settings store with write-through JSON persistence.
//!
//! The backing document is one flat `{ "Key": "stringified value" }` JSON
//! map (`settings.dict`). Every mutation rewrites the whole document
//! synchronously, so memory and disk stay in step after each `set`.
//!
//! Values are stored as strings and converted through the closed
//! [`SettingValue`] set: `String`, `bool`, `i64`, `f64` and the enums that
//! implement the trait. A stored string that fails to parse as the
//! requested type is never an error — `get` falls back to the
//! caller-supplied default.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

// ---------------------------------------------------------------------------
// SettingsError
// ---------------------------------------------------------------------------

/// Errors surfaced by [`SettingsStore`] mutations and loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The value stringifies to an empty string — a value `get` could never
    /// observe, so storing it is a caller bug. Use
    /// [`remove`](SettingsStore::remove) to revert a key to its default.
    #[error("setting value must not be empty")]
    InvalidValue,

    /// The backing document could not be read or written.
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document exists but is not a flat string map.
    #[error("settings document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// SettingValue
// ---------------------------------------------------------------------------

/// Conversion between a typed setting and its canonical stored string.
///
/// This is a closed set: `String`, `bool`, `i64`, `f64`, plus enums such as
/// [`Language`](crate::config::Language). Any other type simply does not
/// implement the trait, so an unsupported `get`/`set` fails to compile.
pub trait SettingValue: Sized {
    /// Parse the stored string; `None` means "fall back to the default".
    fn parse_setting(raw: &str) -> Option<Self>;

    /// Canonical textual representation written to the document.
    fn stringify(&self) -> String;
}

impl SettingValue for String {
    fn parse_setting(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn stringify(&self) -> String {
        self.clone()
    }
}

impl SettingValue for bool {
    fn parse_setting(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl SettingValue for i64 {
    fn parse_setting(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl SettingValue for f64 {
    fn parse_setting(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn stringify(&self) -> String {
        self.to_string()
    }
}

// ---------------------------------------------------------------------------
// SettingsStore
// ---------------------------------------------------------------------------

/// File-backed flat string map with typed accessors.
///
/// Constructed once at startup via [`SettingsStore::open`] and shared as
/// `Arc<SettingsStore>`; the inner `Mutex` serializes writers so concurrent
/// `set` calls cannot interleave their full-document rewrites.
///
/// ```rust,no_run
/// use game_text_overlay::config::{AppPaths, SettingsStore};
///
/// let store = SettingsStore::open(AppPaths::new().settings_file).unwrap();
/// let size: f64 = store.get("FontSize", 28.0);
/// store.set("FontSize", size + 2.0).unwrap();
/// ```
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
}

impl SettingsStore {
    /// Open (or create) the settings document at `path` and load it into
    /// memory. Missing file: the parent directory is created and an empty
    /// map is written first. Loading happens exactly once — all later reads
    /// are served from memory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let empty: HashMap<String, String> = HashMap::new();
            fs::write(&path, serde_json::to_string(&empty)?)?;
            log::info!("settings: created empty document at {}", path.display());
        }

        let content = fs::read_to_string(&path)?;
        let map: HashMap<String, String> = serde_json::from_str(&content)?;

        Ok(Self {
            path,
            map: Mutex::new(map),
        })
    }

    /// Look up `key`; absent key, empty stored string, or a parse failure
    /// all yield `default`.
    pub fn get<T: SettingValue>(&self, key: &str, default: T) -> T {
        let map = self.map.lock().unwrap();
        match map.get(key) {
            Some(raw) if !raw.is_empty() => T::parse_setting(raw).unwrap_or(default),
            _ => default,
        }
    }

    /// Store `value` under `key` and flush the whole document.
    ///
    /// The in-memory map is updated before the flush, so a failed flush
    /// leaves memory ahead of disk; the next successful write reconverges
    /// them.
    pub fn set<T: SettingValue>(
        &self,
        key: impl Into<String>,
        value: T,
    ) -> Result<(), SettingsError> {
        let key = key.into();
        let raw = value.stringify();
        if raw.is_empty() {
            return Err(SettingsError::InvalidValue);
        }

        let mut map = self.map.lock().unwrap();
        log::debug!("settings: {key} changed to {raw}");
        map.insert(key, raw);
        self.flush(&map)
    }

    /// Drop `key` so `get` falls back to its default again, and flush.
    ///
    /// An absent key is not an error — removing twice is a no-op. This is
    /// how a single setting (e.g. the capture pattern) is reverted without
    /// a full [`clear`](Self::clear).
    pub fn remove(&self, key: &str) -> Result<(), SettingsError> {
        let mut map = self.map.lock().unwrap();
        if map.remove(key).is_none() {
            return Ok(());
        }
        log::debug!("settings: {key} removed");
        self.flush(&map)
    }

    /// Empty the map and rewrite the (now empty) document. Full reset.
    pub fn clear(&self) -> Result<(), SettingsError> {
        let mut map = self.map.lock().unwrap();
        map.clear();
        self.flush(&map)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.map.lock().unwrap().len()
    }

    /// `true` when no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn flush(&self, map: &HashMap<String, String>) -> Result<(), SettingsError> {
        let doc = serde_json::to_string(map)?;
        fs::write(&self.path, doc)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{keys, Language};
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::open(dir.path().join("settings.dict")).expect("open")
    }

    #[test]
    fn open_creates_missing_document_and_parents() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.dict");

        let store = SettingsStore::open(&path).expect("open");
        assert!(path.exists());
        assert!(store.is_empty());
    }

    #[test]
    fn get_returns_default_for_missing_key() {
        let dir = tempdir().expect("temp dir");
        let store = open_store(&dir);

        assert_eq!(
            store.get(keys::FONT_SIZE, keys::defaults::FONT_SIZE),
            keys::defaults::FONT_SIZE
        );
        assert_eq!(store.get(keys::ENABLE_TOKENIZER, true), true);
        assert_eq!(store.get("Missing", String::from("fallback")), "fallback");
    }

    #[test]
    fn set_then_get_round_trips_every_supported_type() {
        let dir = tempdir().expect("temp dir");
        let store = open_store(&dir);

        store.set("Name", String::from("eroge")).unwrap();
        store.set(keys::ENABLE_TOKENIZER, true).unwrap();
        store.set("Retries", 3i64).unwrap();
        store.set(keys::FONT_SIZE, 16.5f64).unwrap();
        store
            .set(keys::TARGET_LANGUAGE, Language::English)
            .unwrap();

        assert_eq!(store.get("Name", String::new()), "eroge");
        assert_eq!(store.get(keys::ENABLE_TOKENIZER, false), true);
        assert_eq!(store.get("Retries", 0i64), 3);
        assert_eq!(store.get(keys::FONT_SIZE, 0.0f64), 16.5);
        assert_eq!(
            store.get(keys::TARGET_LANGUAGE, keys::defaults::TARGET_LANGUAGE),
            Language::English
        );
    }

    #[test]
    fn get_returns_default_on_type_mismatch() {
        let dir = tempdir().expect("temp dir");
        let store = open_store(&dir);

        store.set("FontSize", String::from("not a number")).unwrap();

        assert_eq!(store.get("FontSize", 12.0f64), 12.0);
        assert_eq!(store.get("FontSize", 7i64), 7);
        assert_eq!(store.get("FontSize", Language::Auto), Language::Auto);
        // The raw string itself is still readable.
        assert_eq!(store.get("FontSize", String::new()), "not a number");
    }

    #[test]
    fn enum_parse_is_case_sensitive() {
        let dir = tempdir().expect("temp dir");
        let store = open_store(&dir);

        store.set("Lang", String::from("english")).unwrap();
        assert_eq!(store.get("Lang", Language::Japanese), Language::Japanese);
    }

    #[test]
    fn values_survive_a_fresh_open() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.dict");

        {
            let store = SettingsStore::open(&path).expect("open");
            assert_eq!(store.get(keys::FONT_SIZE, 12.0), 12.0);
            store.set(keys::FONT_SIZE, 16.0f64).unwrap();
        }

        let reloaded = SettingsStore::open(&path).expect("reopen");
        assert_eq!(reloaded.get(keys::FONT_SIZE, 12.0), 16.0);
    }

    #[test]
    fn set_rejects_empty_value() {
        let dir = tempdir().expect("temp dir");
        let store = open_store(&dir);

        let err = store.set("Key", String::new()).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue));
        assert!(store.is_empty());
    }

    /// A stored string key can be reverted to its default without clearing
    /// the whole store.
    #[test]
    fn remove_reverts_single_key_to_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.dict");

        let store = SettingsStore::open(&path).expect("open");
        store
            .set(keys::CAPTURE_PATTERN, String::from("<.*?>"))
            .unwrap();
        store.set(keys::FONT_SIZE, 16.0f64).unwrap();

        store.remove(keys::CAPTURE_PATTERN).unwrap();

        // The pattern is back to its default; other keys are untouched.
        assert_eq!(store.get(keys::CAPTURE_PATTERN, String::new()), "");
        assert_eq!(store.get(keys::FONT_SIZE, 12.0), 16.0);

        // The removal is persisted, and removing again is a no-op.
        let reloaded = SettingsStore::open(&path).expect("reopen");
        assert_eq!(reloaded.get(keys::CAPTURE_PATTERN, String::new()), "");
        store.remove(keys::CAPTURE_PATTERN).unwrap();
    }

    #[test]
    fn clear_empties_map_and_document() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.dict");

        let store = SettingsStore::open(&path).expect("open");
        store.set("A", String::from("1")).unwrap();
        store.set("B", String::from("2")).unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        let reloaded = SettingsStore::open(&path).expect("reopen");
        assert!(reloaded.is_empty());
    }

    #[test]
    fn open_rejects_corrupt_document() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.dict");
        std::fs::write(&path, "not json").unwrap();

        let err = SettingsStore::open(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Corrupt(_)));
    }

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SettingsStore>();
    }
}
