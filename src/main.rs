//! Vosk WebSocket Worker
//!
//! Long-lived worker that connects to a decoder endpoint, receives
//! audio chunks, and streams transcription hypotheses back.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio_retry::strategy::FixedInterval;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use vosk_worker::asr::VoskEngine;
use vosk_worker::config::{Args, Settings};
use vosk_worker::pool::WorkerPool;
use vosk_worker::supervisor::{Supervisor, RETRY_COOLDOWN};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from(&args);

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("vosk-worker v{} starting...", env!("CARGO_PKG_VERSION"));

    // The model loads once and is shared read-only across sessions
    let engine = Arc::new(VoskEngine::new(&settings.model_path)?);
    let pool = WorkerPool::with_available_parallelism();
    let supervisor = Supervisor::new(engine, pool, settings);

    tokio::select! {
        _ = supervisor.run(FixedInterval::new(RETRY_COOLDOWN)) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
