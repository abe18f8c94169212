//! Pipeline module — controller, capture phase, archive and events.
//!
//! This module provides:
//! * [`PipelineController`] — consumes raw captures, runs normalize →
//!   tokenize/dispatch, reports through the event channel.
//! * [`PipelineHandle`] — cloneable handle for manual operations
//!   (re-tokenize current text).
//! * [`CapturePhase`] — per-capture state machine.
//! * [`TextArchive`] — append-only archive of normalized captures.
//! * [`PipelineEvent`] — everything the UI collaborator observes.

pub mod archive;
pub mod controller;
pub mod events;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use archive::TextArchive;
pub use controller::{init_tokenizer, PipelineController, PipelineError, PipelineHandle};
pub use events::{PipelineEvent, MAX_LENGTH_TIP};
pub use state::CapturePhase;
