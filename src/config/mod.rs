//! Configuration module — typed settings store, key catalogue and paths.
//!
//! Provides [`SettingsStore`] (flat string map with typed get/set and
//! write-through JSON persistence), the [`keys`] catalogue of stable key
//! names, the [`Language`] enum, and [`AppPaths`] for cross-platform data
//! directories.

pub mod keys;
pub mod language;
pub mod paths;
pub mod store;

pub use language::Language;
pub use paths::AppPaths;
pub use store::{SettingValue, SettingsError, SettingsStore};
