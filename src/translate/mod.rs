//! Translation module — providers, registry and the fan-out dispatcher.
//!
//! This module provides:
//! * [`TranslationProvider`] — async trait implemented by all backends.
//! * [`ApiTranslator`] — OpenAI-compatible REST API provider.
//! * [`ProviderRegistry`] / [`ProviderDescriptor`] — the provider set with
//!   per-provider enable flags read fresh from settings.
//! * [`TranslationDispatcher`] — one tokio task per enabled provider,
//!   first-arrival-first-delivered through the pipeline event channel.
//! * [`TranslateError`] — error variants for provider calls.

pub mod dispatcher;
pub mod provider;
pub mod registry;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use dispatcher::TranslationDispatcher;
pub use provider::{ApiTranslator, TranslateError, TranslationProvider};
pub use registry::{ProviderDescriptor, ProviderRegistry};
