//! Stable setting key names and their defaults.
//!
//! Keys are chosen by the code, never by the user; renaming one orphans the
//! persisted entry, so treat these as part of the on-disk format.

use crate::config::Language;

/// Overlay font size in points.
pub const FONT_SIZE: &str = "FontSize";

/// Whether the morphological tokenizer runs on each capture.
pub const ENABLE_TOKENIZER: &str = "EnableTokenizer";

/// User-supplied regex; matches are deleted from every raw capture.
pub const CAPTURE_PATTERN: &str = "CapturePattern";

/// Source language of the captured game text.
pub const SRC_LANGUAGE: &str = "TransSrcLanguage";

/// Target language of the translation results.
pub const TARGET_LANGUAGE: &str = "TransTargetLanguage";

/// Per-provider call timeout in seconds.
pub const PROVIDER_TIMEOUT_SECS: &str = "ProviderTimeoutSecs";

/// `"{ProviderId}Enabled"` — read fresh at every dispatch.
pub fn provider_enabled(id: &str) -> String {
    format!("{id}Enabled")
}

/// `"{ProviderId}BaseUrl"` — endpoint for an API-backed provider.
pub fn provider_base_url(id: &str) -> String {
    format!("{id}BaseUrl")
}

/// `"{ProviderId}ApiKey"` — optional credential; empty means none.
pub fn provider_api_key(id: &str) -> String {
    format!("{id}ApiKey")
}

/// `"{ProviderId}Model"` — model identifier for an API-backed provider.
pub fn provider_model(id: &str) -> String {
    format!("{id}Model")
}

/// Default values paired with the keys above.
pub mod defaults {
    use super::Language;

    pub const FONT_SIZE: f64 = 28.0;
    pub const ENABLE_TOKENIZER: bool = false;
    pub const SRC_LANGUAGE: Language = Language::Japanese;
    pub const TARGET_LANGUAGE: Language = Language::English;
    pub const PROVIDER_TIMEOUT_SECS: i64 = 10;
}
