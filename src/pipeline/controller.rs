//! Pipeline controller — wires raw captures to normalize → tokenize → dispatch.
//!
//! [`PipelineController`] consumes [`RawCapture`]s from a `tokio::sync::mpsc`
//! channel and reports through the shared [`PipelineEvent`] channel.
//!
//! # Capture flow
//!
//! ```text
//! RawCapture
//!   └─▶ emit CaptureStarted (UI clears transient display)
//!         └─▶ normalize(raw, user pattern)          [Normalizing]
//!               ├─ >120 chars → emit Notice, stop   [LengthRejected]
//!               └─ otherwise                        [Dispatching]
//!                    ├─ archive the text
//!                    ├─ tokenizer enabled → spawn tokenize, emit Tokens
//!                    └─ dispatch to enabled providers (tasks emit
//!                       Translation events as they complete)
//! ```
//!
//! Normalization always completes before tokenization or dispatch begins;
//! the controller never waits for provider results before accepting the
//! next capture. Each capture bumps the shared sequence counter, so
//! still-in-flight provider tasks from an older capture drop their results
//! instead of overwriting newer text.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::capture::RawCapture;
use crate::config::{keys, SettingsStore};
use crate::normalize::{normalize, MAX_CAPTURE_CHARS};
use crate::tokenize::{LexiconTokenizer, Tokenizer};
use crate::translate::{ProviderRegistry, TranslationDispatcher};

use super::archive::TextArchive;
use super::events::{PipelineEvent, MAX_LENGTH_TIP};
use super::state::CapturePhase;

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors surfaced by manual pipeline operations.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Re-tokenization was requested with no explicit text and an empty
    /// archive.
    #[error("no archived text available")]
    NoDataAvailable,
}

// ---------------------------------------------------------------------------
// Tokenizer initialization
// ---------------------------------------------------------------------------

/// Try to load the lexicon tokenizer once at startup.
///
/// On failure the error is logged and, when the tokenizer setting is on,
/// the setting is flipped off so the feature stays disabled for the whole
/// process instead of failing on every capture.
pub fn init_tokenizer(store: &SettingsStore, lexicon: &Path) -> Option<Arc<dyn Tokenizer>> {
    match LexiconTokenizer::load(lexicon) {
        Ok(tokenizer) => Some(Arc::new(tokenizer)),
        Err(e) => {
            log::error!("pipeline: tokenizer unavailable: {e}");
            if store.get(keys::ENABLE_TOKENIZER, keys::defaults::ENABLE_TOKENIZER) {
                if let Err(e) = store.set(keys::ENABLE_TOKENIZER, false) {
                    log::warn!("pipeline: could not persist tokenizer toggle: {e}");
                }
            }
            None
        }
    }
}

// ---------------------------------------------------------------------------
// PipelineHandle
// ---------------------------------------------------------------------------

/// Cloneable handle for manual operations while the controller runs.
///
/// Held by the UI collaborator; currently exposes the "re-tokenize current
/// text" operation.
#[derive(Clone)]
pub struct PipelineHandle {
    store: Arc<SettingsStore>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    archive: TextArchive,
    events_tx: mpsc::Sender<PipelineEvent>,
}

impl PipelineHandle {
    /// Re-run tokenization and re-emit the `Tokens` event.
    ///
    /// With `None` (or empty) text the most recent archive entry is
    /// recovered; an empty archive is the only surfaced failure. When
    /// tokenization is disabled or unavailable this is a no-op, matching
    /// the capture path.
    pub async fn refresh_tokenization(&self, text: Option<&str>) -> Result<(), PipelineError> {
        let text = match text.filter(|t| !t.is_empty()) {
            Some(t) => t.to_string(),
            None => self.archive.last().ok_or(PipelineError::NoDataAvailable)?,
        };

        if !self
            .store
            .get(keys::ENABLE_TOKENIZER, keys::defaults::ENABLE_TOKENIZER)
        {
            return Ok(());
        }
        let Some(tokenizer) = &self.tokenizer else {
            return Ok(());
        };

        let tokens = tokenizer.tokenize(&text);
        let _ = self.events_tx.send(PipelineEvent::Tokens(tokens)).await;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PipelineController
// ---------------------------------------------------------------------------

/// Drives the capture → normalize → tokenize/dispatch pipeline.
///
/// Create with [`PipelineController::new`], take a [`handle`](Self::handle)
/// for the UI, then call [`run`](Self::run) inside a tokio task.
pub struct PipelineController {
    store: Arc<SettingsStore>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    dispatcher: TranslationDispatcher,
    archive: TextArchive,
    events_tx: mpsc::Sender<PipelineEvent>,
    latest_seq: Arc<AtomicU64>,
    phase: CapturePhase,
}

impl PipelineController {
    /// Create a new controller.
    ///
    /// # Arguments
    ///
    /// * `store`     — shared settings store (pattern, toggles, flags).
    /// * `tokenizer` — `None` when the lexicon failed to load at startup.
    /// * `registry`  — full provider set; the enabled subset is re-read per
    ///                 capture.
    /// * `events_tx` — channel the UI collaborator consumes.
    pub fn new(
        store: Arc<SettingsStore>,
        tokenizer: Option<Arc<dyn Tokenizer>>,
        registry: Arc<ProviderRegistry>,
        events_tx: mpsc::Sender<PipelineEvent>,
    ) -> Self {
        let latest_seq = Arc::new(AtomicU64::new(0));
        let dispatcher = TranslationDispatcher::new(
            registry,
            Arc::clone(&store),
            events_tx.clone(),
            Arc::clone(&latest_seq),
        );

        Self {
            store,
            tokenizer,
            dispatcher,
            archive: TextArchive::new(),
            events_tx,
            latest_seq,
            phase: CapturePhase::Idle,
        }
    }

    /// Handle for manual operations (usable after `run` consumes `self`).
    pub fn handle(&self) -> PipelineHandle {
        PipelineHandle {
            store: Arc::clone(&self.store),
            tokenizer: self.tokenizer.clone(),
            archive: self.archive.clone(),
            events_tx: self.events_tx.clone(),
        }
    }

    /// The archive of normalized captures (shared, append-only).
    pub fn archive(&self) -> TextArchive {
        self.archive.clone()
    }

    /// Phase of the most recent capture pass.
    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    /// Run the controller until `capture_rx` is closed.
    ///
    /// Spawn as a tokio task from `main()`; it never returns while the
    /// capture transport holds the sender.
    pub async fn run(mut self, mut capture_rx: mpsc::Receiver<RawCapture>) {
        while let Some(capture) = capture_rx.recv().await {
            self.process(capture).await;
        }
        log::info!("pipeline: capture channel closed, controller shutting down");
    }

    /// One full capture pass.
    async fn process(&mut self, capture: RawCapture) {
        // Bumping the counter first makes any still-running provider task
        // from an older capture stale.
        let seq = self.latest_seq.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!(
            "pipeline: capture {seq} from source {} ({} bytes)",
            capture.source_id,
            capture.text.len()
        );

        let _ = self
            .events_tx
            .send(PipelineEvent::CaptureStarted { seq })
            .await;

        self.phase = CapturePhase::Normalizing;
        let pattern: String = self.store.get(keys::CAPTURE_PATTERN, String::new());
        let text = normalize(&capture.text, &pattern);

        if text.chars().count() > MAX_CAPTURE_CHARS {
            self.phase = CapturePhase::LengthRejected;
            log::debug!(
                "pipeline: capture {seq} {}, {} chars after cleanup",
                self.phase.label(),
                text.chars().count()
            );
            let _ = self
                .events_tx
                .send(PipelineEvent::Notice {
                    message: MAX_LENGTH_TIP.to_string(),
                })
                .await;
            self.phase = CapturePhase::Idle;
            return;
        }

        self.phase = CapturePhase::Dispatching;
        self.archive.push(text.clone());

        // Tokenization runs in its own task so a slow lexicon lookup can
        // never delay the provider fan-out.
        if self
            .store
            .get(keys::ENABLE_TOKENIZER, keys::defaults::ENABLE_TOKENIZER)
        {
            if let Some(tokenizer) = self.tokenizer.clone() {
                let events_tx = self.events_tx.clone();
                let text = text.clone();
                tokio::spawn(async move {
                    let tokens = tokenizer.tokenize(&text);
                    let _ = events_tx.send(PipelineEvent::Tokens(tokens)).await;
                });
            }
        }

        let launched = self.dispatcher.dispatch(&text, seq);
        log::debug!("pipeline: capture {seq} dispatched to {launched} providers");
        self.phase = CapturePhase::Idle;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
