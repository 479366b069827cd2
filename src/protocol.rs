//! Wire Protocol
//!
//! Classifies inbound WebSocket frames into protocol messages. The peer
//! sends binary frames of raw audio, an optional one-shot JSON
//! configuration frame, and the text sentinel `EOS` to finalize.

use serde::Deserialize;
use tokio_tungstenite::tungstenite::Message;

use crate::error::WorkerResult;

/// End-of-utterance sentinel sent as a text frame
pub const EOS: &str = "EOS";

/// Marker substring identifying a configuration frame
const CONFIG_MARKER: &str = "config";

/// Fields of a configuration frame. Both are optional; unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigPayload {
    pub sample_rate: Option<f32>,
    pub word_list: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ConfigEnvelope {
    config: ConfigPayload,
}

/// A classified inbound frame
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// Session configuration; updates stored fields, produces no response
    Config(ConfigPayload),
    /// Raw audio bytes for the recognizer
    Audio(Vec<u8>),
    /// End-of-stream: finalize and close the session
    Eos,
    /// Peer closed the connection
    Close,
    /// Control frames with no protocol meaning (ping/pong)
    Ignore,
}

/// Classify one inbound frame. Text frames that are neither the sentinel
/// nor a configuration payload are treated as audio, same as binary.
pub fn classify(message: Message) -> WorkerResult<Inbound> {
    match message {
        Message::Text(text) => {
            if text == EOS {
                Ok(Inbound::Eos)
            } else if text.contains(CONFIG_MARKER) {
                let envelope: ConfigEnvelope = serde_json::from_str(&text)?;
                Ok(Inbound::Config(envelope.config))
            } else {
                Ok(Inbound::Audio(text.into_bytes()))
            }
        }
        Message::Binary(bytes) => Ok(Inbound::Audio(bytes)),
        Message::Close(_) => Ok(Inbound::Close),
        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => Ok(Inbound::Ignore),
    }
}
