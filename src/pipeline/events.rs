//! Events the pipeline emits toward the UI collaborator.
//!
//! The pipeline reports through one `tokio::sync::mpsc` channel instead of
//! return values: a capture produces zero or more events, and provider
//! results arrive whenever their calls complete.

use crate::tokenize::TokenSequence;

/// Notice text emitted when a normalized capture exceeds the length gate.
pub const MAX_LENGTH_TIP: &str =
    "Captured text is too long — pick a better hook or tighten the cleanup pattern";

/// One observable pipeline output.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// A new capture entered the pipeline; the UI clears per-capture
    /// transient display state (appended translations, token ruby).
    CaptureStarted {
        /// Capture sequence number, strictly increasing per process.
        seq: u64,
    },

    /// Structured tokens for the current capture (tokenization enabled).
    Tokens(TokenSequence),

    /// One provider's translation, emitted the moment it completes.
    Translation {
        provider: String,
        text: String,
        elapsed_ms: u64,
    },

    /// A system message shown in place of results (e.g. the too-long tip).
    Notice { message: String },
}
