//! Headless harness for the capture pipeline.
//!
//! Stands in for the GUI shell and the process-hook transport: each stdin
//! line becomes one raw capture, pipeline events are printed as they
//! arrive. `/retok` re-tokenizes the most recent capture, `/providers`
//! lists the registry.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Resolve [`AppPaths`] and open the [`SettingsStore`].
//! 3. Try to load the lexicon tokenizer (failure disables the feature).
//! 4. Register the configured API providers.
//! 5. Spawn the pipeline controller and the event printer.
//! 6. Feed stdin lines into the capture channel until EOF.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use game_text_overlay::capture::RawCapture;
use game_text_overlay::config::{AppPaths, SettingsStore};
use game_text_overlay::pipeline::{init_tokenizer, PipelineController, PipelineEvent};
use game_text_overlay::translate::{ApiTranslator, ProviderRegistry};

/// API-backed providers offered out of the box; each one is enabled and
/// configured through its own settings keys.
const API_PROVIDERS: &[(&str, &str)] = &[
    ("Ollama", "Ollama"),
    ("OpenAi", "OpenAI"),
    ("Groq", "Groq"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let paths = AppPaths::new();
    let store = Arc::new(
        SettingsStore::open(&paths.settings_file)
            .with_context(|| format!("opening {}", paths.settings_file.display()))?,
    );
    log::info!("settings loaded from {}", paths.settings_file.display());

    let tokenizer = init_tokenizer(&store, &paths.lexicon_file);

    let mut registry = ProviderRegistry::new(Arc::clone(&store));
    for (id, name) in API_PROVIDERS {
        registry.register(Arc::new(ApiTranslator::from_settings(
            Arc::clone(&store),
            *id,
            *name,
        )));
    }
    let registry = Arc::new(registry);

    let (capture_tx, capture_rx) = mpsc::channel::<RawCapture>(16);
    let (events_tx, mut events_rx) = mpsc::channel::<PipelineEvent>(64);

    let controller = PipelineController::new(
        Arc::clone(&store),
        tokenizer,
        Arc::clone(&registry),
        events_tx,
    );
    let handle = controller.handle();
    tokio::spawn(controller.run(capture_rx));

    // Event printer — the stand-in for the overlay window.
    tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            match event {
                PipelineEvent::CaptureStarted { seq } => {
                    println!("── capture {seq} ──");
                }
                PipelineEvent::Tokens(tokens) => {
                    let line: Vec<String> = tokens
                        .iter()
                        .map(|t| match &t.reading {
                            Some(r) => format!("{}({r})", t.surface),
                            None => t.surface.clone(),
                        })
                        .collect();
                    println!("tokens: {}", line.join(" "));
                }
                PipelineEvent::Translation {
                    provider,
                    text,
                    elapsed_ms,
                } => {
                    println!("{provider} {elapsed_ms}ms: {text}");
                }
                PipelineEvent::Notice { message } => {
                    println!("notice: {message}");
                }
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut source_id = 0u64;

    while let Some(line) = lines.next_line().await? {
        match line.as_str() {
            "/retok" => {
                if let Err(e) = handle.refresh_tokenization(None).await {
                    eprintln!("{e}");
                }
            }
            "/providers" => {
                for d in registry.descriptors() {
                    let state = if d.enabled { "enabled" } else { "disabled" };
                    println!("{} ({state})", d.name);
                }
            }
            "" => {}
            _ => {
                source_id += 1;
                capture_tx
                    .send(RawCapture::new(line, source_id))
                    .await
                    .context("pipeline controller stopped")?;
            }
        }
    }

    Ok(())
}
