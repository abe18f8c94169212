//! Concurrent fan-out of one capture to every enabled provider.
//!
//! Each provider call runs in its own tokio task and reports through the
//! shared pipeline event channel the moment it finishes — results surface
//! in arrival order, not registration order. A provider that errors, times
//! out or returns an empty string emits nothing; it can never stall or
//! cancel the others.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::config::{keys, SettingsStore};
use crate::pipeline::PipelineEvent;

use super::registry::ProviderRegistry;

/// Fan-out/fan-in orchestrator for provider calls.
///
/// `dispatch` returns as soon as the per-provider tasks are launched; the
/// pipeline never waits for provider results before accepting the next
/// capture.
pub struct TranslationDispatcher {
    registry: Arc<ProviderRegistry>,
    store: Arc<SettingsStore>,
    events_tx: mpsc::Sender<PipelineEvent>,
    latest_seq: Arc<AtomicU64>,
}

impl TranslationDispatcher {
    /// `latest_seq` is shared with the pipeline controller, which bumps it
    /// for every capture; a task whose capture is no longer the latest at
    /// completion drops its result instead of overwriting newer text.
    pub fn new(
        registry: Arc<ProviderRegistry>,
        store: Arc<SettingsStore>,
        events_tx: mpsc::Sender<PipelineEvent>,
        latest_seq: Arc<AtomicU64>,
    ) -> Self {
        Self {
            registry,
            store,
            events_tx,
            latest_seq,
        }
    }

    /// Launch one translation task per currently enabled provider and
    /// return the number launched.
    ///
    /// The enabled set and the per-call timeout are read from the settings
    /// store at call time, so toggling a provider between captures takes
    /// effect immediately.
    pub fn dispatch(&self, text: &str, seq: u64) -> usize {
        let timeout = Duration::from_secs(
            self.store
                .get(
                    keys::PROVIDER_TIMEOUT_SECS,
                    keys::defaults::PROVIDER_TIMEOUT_SECS,
                )
                .max(1) as u64,
        );

        let providers = self.registry.enabled();
        let launched = providers.len();

        for provider in providers {
            let text = text.to_string();
            let events_tx = self.events_tx.clone();
            let latest_seq = Arc::clone(&self.latest_seq);

            tokio::spawn(async move {
                let start = Instant::now();
                let outcome = tokio::time::timeout(timeout, provider.translate(&text)).await;

                let translated = match outcome {
                    Ok(Ok(t)) if !t.is_empty() => t,
                    Ok(Ok(_)) => {
                        log::debug!("dispatch: {} returned empty text", provider.name());
                        return;
                    }
                    Ok(Err(e)) => {
                        log::debug!("dispatch: {} failed: {e}", provider.name());
                        return;
                    }
                    Err(_) => {
                        log::debug!("dispatch: {} timed out", provider.name());
                        return;
                    }
                };

                if latest_seq.load(Ordering::SeqCst) != seq {
                    log::debug!(
                        "dispatch: dropping stale result from {} (capture {seq})",
                        provider.name()
                    );
                    return;
                }

                let elapsed_ms = start.elapsed().as_millis() as u64;
                log::debug!("dispatch: {} -> {translated:?} ({elapsed_ms}ms)", provider.name());

                let _ = events_tx
                    .send(PipelineEvent::Translation {
                        provider: provider.name().to_string(),
                        text: translated,
                        elapsed_ms,
                    })
                    .await;
            });
        }

        launched
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
