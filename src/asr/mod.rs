//! ASR (Automatic Speech Recognition) Module
//!
//! Engine abstraction consumed by the session loop. The engine wraps
//! process-wide, read-only-after-load model state and hands out
//! per-session recognizer instances. Recognizer instances are not safe
//! for concurrent calls; the session loop keeps at most one call in
//! flight per recognizer.

pub mod vosk;

use anyhow::Result;

// Re-export main types
pub use vosk::VoskEngine;

/// Factory for per-session recognizers over a shared model
pub trait SpeechEngine: Send + Sync {
    /// Build a recognizer committed to the given sample rate and,
    /// optionally, a constraining word list.
    fn create_recognizer(
        &self,
        sample_rate: f32,
        word_list: Option<&[String]>,
    ) -> Result<Box<dyn Recognizer>>;
}

/// Per-session streaming recognizer.
///
/// Result methods return engine-defined JSON text: `{"partial": "..."}`
/// for tentative hypotheses, `{"text": "..."}` for finalized segments.
pub trait Recognizer: Send {
    /// Feed raw audio bytes. Returns true when an utterance boundary
    /// was reached.
    fn accept_waveform(&mut self, bytes: &[u8]) -> bool;

    /// Tentative hypothesis for audio not yet confirmed as a segment
    fn partial_result(&mut self) -> String;

    /// Finalized segment result after an utterance boundary
    fn result(&mut self) -> String;

    /// Terminal result on end-of-stream
    fn final_result(&mut self) -> String;
}
