//! Provider registry — the full provider set plus per-provider enable flags.
//!
//! The enabled set is read from the settings store on every call, never
//! cached, so toggling a provider applies to the very next capture.

use std::sync::Arc;

use crate::config::{keys, SettingsStore};

use super::provider::TranslationProvider;

// ---------------------------------------------------------------------------
// ProviderDescriptor
// ---------------------------------------------------------------------------

/// Snapshot of one registered provider for the UI (settings page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    /// Stable identifier used for settings keys.
    pub id: String,
    /// Display name attached to emitted results.
    pub name: String,
    /// Whether the provider participates in dispatch right now.
    pub enabled: bool,
}

// ---------------------------------------------------------------------------
// ProviderRegistry
// ---------------------------------------------------------------------------

/// Owns the full provider list and answers "who is enabled right now?".
pub struct ProviderRegistry {
    store: Arc<SettingsStore>,
    providers: Vec<Arc<dyn TranslationProvider>>,
}

impl ProviderRegistry {
    pub fn new(store: Arc<SettingsStore>) -> Self {
        Self {
            store,
            providers: Vec::new(),
        }
    }

    /// Register a provider. Registration order is preserved in
    /// [`descriptors`](Self::descriptors); it has no effect on dispatch,
    /// which is unordered.
    pub fn register(&mut self, provider: Arc<dyn TranslationProvider>) {
        log::debug!("registry: registered provider {}", provider.id());
        self.providers.push(provider);
    }

    /// Descriptors for every registered provider with its current enable
    /// flag, read fresh from the settings store.
    pub fn descriptors(&self) -> Vec<ProviderDescriptor> {
        self.providers
            .iter()
            .map(|p| ProviderDescriptor {
                id: p.id().to_string(),
                name: p.name().to_string(),
                enabled: self.store.get(&keys::provider_enabled(p.id()), false),
            })
            .collect()
    }

    /// The currently enabled providers. Disabled is the default: a provider
    /// with no stored flag does not dispatch.
    pub fn enabled(&self) -> Vec<Arc<dyn TranslationProvider>> {
        self.providers
            .iter()
            .filter(|p| self.store.get(&keys::provider_enabled(p.id()), false))
            .cloned()
            .collect()
    }

    /// Number of registered providers (enabled or not).
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
