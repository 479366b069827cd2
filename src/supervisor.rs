//! Connection Supervisor
//!
//! Outer retry loop: establish the WebSocket connection, hand it to a
//! fresh session, and reconnect after any termination. Session failures
//! are logged and absorbed; they never become process failures.

use std::sync::Arc;
use std::time::Duration;

use tokio_tungstenite::connect_async;
use tracing::{error, info};

use crate::asr::SpeechEngine;
use crate::config::Settings;
use crate::pool::WorkerPool;
use crate::session::Session;

/// Fixed cooldown between reconnect attempts
pub const RETRY_COOLDOWN: Duration = Duration::from_secs(1);

/// Supervises the connection to the decoder endpoint
pub struct Supervisor {
    engine: Arc<dyn SpeechEngine>,
    pool: WorkerPool,
    settings: Settings,
}

impl Supervisor {
    pub fn new(engine: Arc<dyn SpeechEngine>, pool: WorkerPool, settings: Settings) -> Self {
        Self {
            engine,
            pool,
            settings,
        }
    }

    /// Connect and serve sessions until the process is stopped. Every
    /// reconnection starts a brand-new session with empty state. The
    /// delay between attempts comes from the injected backoff strategy
    /// (production uses a fixed interval; tests can inject zero delays).
    pub async fn run(&self, mut backoff: impl Iterator<Item = Duration>) {
        loop {
            match connect_async(self.settings.url.as_str()).await {
                Ok((stream, _)) => {
                    info!("Connected to {}", self.settings.url);
                    let mut session =
                        Session::new(self.engine.clone(), self.pool.clone(), &self.settings);
                    match session.handle(stream).await {
                        Ok(()) => info!("Session ended"),
                        Err(e) => error!("Session failed: {}", e),
                    }
                }
                Err(e) => {
                    error!("Connection to {} failed: {}", self.settings.url, e);
                }
            }

            let delay = backoff.next().unwrap_or(RETRY_COOLDOWN);
            tokio::time::sleep(delay).await;
        }
    }
}
