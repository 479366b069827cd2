//! Per-Connection Session Loop
//!
//! State machine owning one recognizer instance for the lifetime of a
//! connection. Reads frames in arrival order, applies configuration,
//! dispatches chunks to the worker pool one at a time, and writes each
//! response back before reading the next frame.

use std::sync::Arc;

use futures::{Sink, SinkExt, Stream, StreamExt};
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tracing::{debug, warn};

use crate::asr::{Recognizer, SpeechEngine};
use crate::config::Settings;
use crate::error::{WorkerError, WorkerResult};
use crate::pool::WorkerPool;
use crate::processor::{process_chunk, Chunk};
use crate::protocol::{classify, ConfigPayload, Inbound};

/// Session state for one logical connection.
///
/// The recognizer is created lazily on the first audio chunk, committing
/// whatever sample rate and word list are stored at that point. Later
/// configuration frames update the stored fields but never touch an
/// already-built recognizer.
pub struct Session {
    engine: Arc<dyn SpeechEngine>,
    pool: WorkerPool,
    recognizer: Option<Box<dyn Recognizer>>,
    sample_rate: f32,
    word_list: Option<Vec<String>>,
    enable_word_list: bool,
}

impl Session {
    /// Fresh session with the default configuration from settings
    pub fn new(engine: Arc<dyn SpeechEngine>, pool: WorkerPool, settings: &Settings) -> Self {
        Self {
            engine,
            pool,
            recognizer: None,
            sample_rate: settings.sample_rate,
            word_list: None,
            enable_word_list: settings.enable_word_list,
        }
    }

    /// Drive the session until end-of-stream, an EOS chunk, or an error.
    /// On return the connection has been closed and the recognizer
    /// discarded.
    pub async fn handle<S>(&mut self, mut stream: S) -> WorkerResult<()>
    where
        S: Stream<Item = Result<Message, WsError>> + Sink<Message, Error = WsError> + Unpin,
    {
        while let Some(message) = stream.next().await {
            let message = match message {
                Ok(message) => message,
                // Peer going away is a normal end of session
                Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => break,
                Err(e) => return Err(e.into()),
            };
            debug!("Message size = {}", message.len());

            let inbound = match classify(message) {
                Ok(inbound) => inbound,
                Err(WorkerError::Parse(e)) => {
                    // Malformed configuration is recoverable: drop the
                    // frame and keep the session alive.
                    warn!("Ignoring malformed configuration frame: {}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let chunk = match inbound {
                Inbound::Config(config) => {
                    self.apply_config(config);
                    continue;
                }
                Inbound::Audio(bytes) => Chunk::Audio(bytes),
                Inbound::Eos => Chunk::Eos,
                Inbound::Close => break,
                Inbound::Ignore => continue,
            };

            let (response, stop) = self.dispatch(chunk).await?;
            stream.send(Message::Text(response)).await?;

            if stop {
                break;
            }
        }

        let _ = stream.close().await;
        Ok(())
    }

    /// Update stored configuration fields. The sample rate and word
    /// list commit when the recognizer is constructed; after that this
    /// only records the values.
    fn apply_config(&mut self, config: ConfigPayload) {
        if let Some(rate) = config.sample_rate {
            debug!("Configured sample rate: {}", rate);
            self.sample_rate = rate;
        }
        if let Some(words) = config.word_list {
            debug!("Configured word list ({} words)", words.len());
            self.word_list = Some(words);
        }
    }

    /// Submit one chunk to the worker pool and await its completion.
    /// The recognizer travels into the closure and back out, so a
    /// second call for this session cannot be in flight.
    async fn dispatch(&mut self, chunk: Chunk) -> WorkerResult<(String, bool)> {
        let mut rec = match self.recognizer.take() {
            Some(rec) => rec,
            None => self.provision_recognizer()?,
        };

        let (rec, response, stop) = self
            .pool
            .submit(move || {
                let (response, stop) = process_chunk(rec.as_mut(), &chunk);
                (rec, response, stop)
            })
            .await?;

        self.recognizer = Some(rec);
        Ok((response, stop))
    }

    fn provision_recognizer(&self) -> WorkerResult<Box<dyn Recognizer>> {
        let word_list = if self.enable_word_list {
            self.word_list.as_deref()
        } else {
            None
        };

        debug!("Creating recognizer at {} Hz", self.sample_rate);
        self.engine
            .create_recognizer(self.sample_rate, word_list)
            .map_err(|e| WorkerError::Engine(e.to_string()))
    }
}
