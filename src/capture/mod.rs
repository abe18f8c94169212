//! Raw text captures from the external game-text transport.
//!
//! The transport (process hook, clipboard watcher, …) is an external
//! collaborator: it holds the `tokio::sync::mpsc::Sender<RawCapture>` end
//! of the pipeline channel and may deliver at any rate, including while a
//! previous capture's provider calls are still in flight.

/// One unit of raw text surfaced by the capture transport.
///
/// Immutable once received; lives for exactly one pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCapture {
    /// The captured text, untouched — normalization happens in the pipeline.
    pub text: String,
    /// Opaque handle identifying the hook/thread the text came from.
    pub source_id: u64,
}

impl RawCapture {
    pub fn new(text: impl Into<String>, source_id: u64) -> Self {
        Self {
            text: text.into(),
            source_id,
        }
    }
}
