//! Vosk adapter for the ASR engine abstraction

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{debug, info};
use vosk::{DecodingState, Model};

use super::{Recognizer, SpeechEngine};

/// Engine over a loaded Vosk model.
///
/// Loading the model is expensive; one instance is shared read-only
/// across every session for the lifetime of the process.
pub struct VoskEngine {
    model: Model,
}

impl VoskEngine {
    /// Load the Vosk model from disk
    pub fn new(model_path: &Path) -> Result<Self> {
        if !model_path.exists() {
            return Err(anyhow::anyhow!(
                "Vosk model not found at {}",
                model_path.display()
            ));
        }

        info!("Loading Vosk model from: {}", model_path.display());

        let model_str = model_path.to_str().ok_or_else(|| {
            anyhow::anyhow!(
                "Vosk model path is not valid UTF-8: {}",
                model_path.display()
            )
        })?;

        let model = Model::new(model_str).context("Failed to load Vosk model")?;

        Ok(Self { model })
    }
}

impl SpeechEngine for VoskEngine {
    fn create_recognizer(
        &self,
        sample_rate: f32,
        word_list: Option<&[String]>,
    ) -> Result<Box<dyn Recognizer>> {
        let inner = match word_list {
            Some(words) if !words.is_empty() => {
                info!("⚙️ Using word list ({} words)", words.len());
                let grammar: Vec<&str> = words.iter().map(String::as_str).collect();
                vosk::Recognizer::new_with_grammar(&self.model, sample_rate, &grammar)
                    .context("Failed to create Vosk recognizer with word list")?
            }
            _ => vosk::Recognizer::new(&self.model, sample_rate)
                .context("Failed to create Vosk recognizer")?,
        };

        Ok(Box::new(VoskRecognizer { inner }))
    }
}

/// Per-session recognizer wrapping `vosk::Recognizer`
struct VoskRecognizer {
    inner: vosk::Recognizer,
}

impl Recognizer for VoskRecognizer {
    fn accept_waveform(&mut self, bytes: &[u8]) -> bool {
        let samples = bytes_to_samples(bytes);

        match self.inner.accept_waveform(&samples) {
            DecodingState::Finalized => true,
            DecodingState::Running => false,
            DecodingState::Failed => {
                debug!("Decoding failed for this chunk");
                false
            }
        }
    }

    fn partial_result(&mut self) -> String {
        json!({"partial": self.inner.partial_result().partial}).to_string()
    }

    fn result(&mut self) -> String {
        let text = self
            .inner
            .result()
            .single()
            .map(|r| r.text.to_string())
            .unwrap_or_default();
        json!({"text": text}).to_string()
    }

    fn final_result(&mut self) -> String {
        let text = self
            .inner
            .final_result()
            .single()
            .map(|r| r.text.to_string())
            .unwrap_or_default();
        json!({"text": text}).to_string()
    }
}

/// Interpret the raw payload as S16LE samples; a trailing odd byte is dropped
fn bytes_to_samples(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
