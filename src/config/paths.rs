//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Data dir (settings document + tokenizer lexicon):
//!   Windows: %LOCALAPPDATA%\game-text-overlay\
//!   macOS:   ~/Library/Application Support/game-text-overlay/
//!   Linux:   ~/.local/share/game-text-overlay/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for the settings document and tokenizer lexicon.
    pub data_dir: PathBuf,
    /// Full path to `settings.dict` (flat JSON string map).
    pub settings_file: PathBuf,
    /// Full path to `lexicon.tsv` (tokenizer resource).
    pub lexicon_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "game-text-overlay";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = data_dir.join("settings.dict");
        let lexicon_file = data_dir.join("lexicon.tsv");

        Self {
            data_dir,
            settings_file,
            lexicon_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_non_empty() {
        let paths = AppPaths::new();
        assert!(paths.data_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths
            .settings_file
            .file_name()
            .is_some_and(|n| n == "settings.dict"));
        assert!(paths
            .lexicon_file
            .file_name()
            .is_some_and(|n| n == "lexicon.tsv"));
    }
}
