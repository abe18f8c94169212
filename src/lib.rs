//! Core pipeline of a game-text translation overlay.
//!
//! Raw text captured from an external game process flows through one
//! asynchronous pipeline: cleanup, an optional morphological tokenization
//! pass, and concurrent fan-out to every enabled translation provider,
//! with each provider's result surfaced the moment it arrives. A typed
//! settings store persists pipeline behaviour across restarts.
//!
//! The GUI shell and the process-hooking transport are external
//! collaborators: the transport feeds [`capture::RawCapture`]s into an mpsc
//! channel, the UI consumes [`pipeline::PipelineEvent`]s from another.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use game_text_overlay::capture::RawCapture;
//! use game_text_overlay::config::{AppPaths, SettingsStore};
//! use game_text_overlay::pipeline::{init_tokenizer, PipelineController};
//! use game_text_overlay::translate::ProviderRegistry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let paths = AppPaths::new();
//!     let store = Arc::new(SettingsStore::open(paths.settings_file).unwrap());
//!     let tokenizer = init_tokenizer(&store, &paths.lexicon_file);
//!     let registry = Arc::new(ProviderRegistry::new(Arc::clone(&store)));
//!
//!     let (capture_tx, capture_rx) = tokio::sync::mpsc::channel(16);
//!     let (events_tx, mut events_rx) = tokio::sync::mpsc::channel(64);
//!
//!     let controller = PipelineController::new(store, tokenizer, registry, events_tx);
//!     tokio::spawn(controller.run(capture_rx));
//!
//!     capture_tx.send(RawCapture::new("こんにちは", 0)).await.unwrap();
//!     while let Some(event) = events_rx.recv().await {
//!         println!("{event:?}");
//!     }
//! }
//! ```

pub mod capture;
pub mod config;
pub mod normalize;
pub mod pipeline;
pub mod tokenize;
pub mod translate;
