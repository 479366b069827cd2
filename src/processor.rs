//! Chunk Processing
//!
//! Pure decision logic mapping one chunk plus recognizer state to the
//! outbound response and a session-close flag. Runs on the worker pool
//! and performs no I/O; it touches only the recognizer passed in.

use crate::asr::Recognizer;

/// A chunk handed to the processor by the session loop
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    /// Raw audio bytes
    Audio(Vec<u8>),
    /// End-of-stream: finalize and close the session
    Eos,
}

/// Process one chunk. Returns the JSON response text and whether the
/// session should stop.
pub fn process_chunk(rec: &mut dyn Recognizer, chunk: &Chunk) -> (String, bool) {
    match chunk {
        Chunk::Eos => (rec.final_result(), true),
        Chunk::Audio(bytes) => {
            if rec.accept_waveform(bytes) {
                (rec.result(), false)
            } else {
                (rec.partial_result(), false)
            }
        }
    }
}
