//! Morphological tokenization of captured text.
//!
//! This module provides:
//! * [`Token`] / [`TokenSequence`] — surface + optional reading and POS.
//! * [`Tokenizer`] — trait implemented by all tokenizer backends.
//! * [`LexiconTokenizer`] — greedy longest-match segmenter over a TSV lexicon.
//! * [`TokenizeError`] — resource initialization failure.
//!
//! Tokenization is optional: the pipeline attempts to build a backend once
//! at startup, and a [`TokenizeError::ResourceInit`] permanently disables
//! the feature for the process instead of erroring on every capture.

pub mod lexicon;

pub use lexicon::LexiconTokenizer;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Token / TokenSequence
// ---------------------------------------------------------------------------

/// One morphological unit of a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The text as it appears in the capture.
    pub surface: String,
    /// Kana reading, when the lexicon knows one.
    pub reading: Option<String>,
    /// Part-of-speech tag, when the lexicon knows one.
    pub part_of_speech: Option<String>,
}

impl Token {
    /// A bare token with no reading or POS — used for lexicon misses.
    pub fn surface_only(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: None,
            part_of_speech: None,
        }
    }
}

/// Ordered token sequence for one capture; consumed by the UI layer.
pub type TokenSequence = Vec<Token>;

// ---------------------------------------------------------------------------
// TokenizeError
// ---------------------------------------------------------------------------

/// Tokenizer backend failures.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The backing linguistic resource is missing, unreadable or empty.
    /// Surfaced once at startup; never per-capture.
    #[error("tokenizer resource failed to initialize: {0}")]
    ResourceInit(String),
}

// ---------------------------------------------------------------------------
// Tokenizer trait
// ---------------------------------------------------------------------------

/// Trait for tokenizer backends.
///
/// Tokenization is pure with respect to the pipeline: it never mutates the
/// normalized text and never blocks the translation path. Implementors must
/// be `Send + Sync` so they can be shared as `Arc<dyn Tokenizer>`.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> TokenSequence;
}
