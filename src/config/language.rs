//! Translation language pair, persisted through the settings store.

use crate::config::store::SettingValue;

/// Languages a provider can translate from or to.
///
/// Stored by exact variant name; parsing is case-sensitive, so a hand-edited
/// document with `"english"` falls back to the caller's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Let the provider detect the source language.
    Auto,
    Japanese,
    English,
    SimplifiedChinese,
    TraditionalChinese,
    Korean,
}

impl Language {
    /// Canonical name, identical to the Rust variant identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Auto => "Auto",
            Language::Japanese => "Japanese",
            Language::English => "English",
            Language::SimplifiedChinese => "SimplifiedChinese",
            Language::TraditionalChinese => "TraditionalChinese",
            Language::Korean => "Korean",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Auto" => Some(Language::Auto),
            "Japanese" => Some(Language::Japanese),
            "English" => Some(Language::English),
            "SimplifiedChinese" => Some(Language::SimplifiedChinese),
            "TraditionalChinese" => Some(Language::TraditionalChinese),
            "Korean" => Some(Language::Korean),
            _ => None,
        }
    }
}

impl SettingValue for Language {
    fn parse_setting(raw: &str) -> Option<Self> {
        Language::from_name(raw)
    }

    fn stringify(&self) -> String {
        self.as_str().to_string()
    }
}
