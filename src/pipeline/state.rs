//! Per-capture phase of the pipeline controller.
//!
//! The controller moves through these phases synchronously for each
//! capture; `Dispatching` only covers launching the provider tasks, so the
//! controller is back in `Idle` while results are still in flight.

/// Phases of one capture pass.
///
/// ```text
/// Idle ──raw capture──▶ Normalizing
///                       ──too long──▶ LengthRejected ──▶ Idle
///                       ──otherwise─▶ Dispatching    ──▶ Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    /// Waiting for the next raw capture.
    Idle,

    /// Cleaning the raw text and evaluating the length gate.
    Normalizing,

    /// The normalized text exceeded the gate; one notice was emitted and
    /// nothing was dispatched.
    LengthRejected,

    /// Archiving, tokenization and provider fan-out are being launched.
    Dispatching,
}

impl CapturePhase {
    /// Short label for logs and a status display.
    pub fn label(&self) -> &'static str {
        match self {
            CapturePhase::Idle => "Idle",
            CapturePhase::Normalizing => "Normalizing",
            CapturePhase::LengthRejected => "Rejected",
            CapturePhase::Dispatching => "Dispatching",
        }
    }
}

impl Default for CapturePhase {
    fn default() -> Self {
        CapturePhase::Idle
    }
}
