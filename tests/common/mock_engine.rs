//! Mock Speech Engine for Testing
//!
//! Records recognizer constructions and returns scripted hypotheses so
//! tests can assert on commit-once configuration and response ordering.

use std::sync::Mutex;

use anyhow::Result;
use vosk_worker::asr::{Recognizer, SpeechEngine};

/// Mock engine that records every recognizer construction
#[derive(Default)]
pub struct MockEngine {
    /// (sample_rate, word_list) committed at each construction
    pub created: Mutex<Vec<(f32, Option<Vec<String>>)>>,
    /// Chunk ordinals (1-based) after which the recognizer reports an
    /// utterance boundary
    pub boundary_after: Vec<usize>,
}

impl MockEngine {
    pub fn with_boundaries(boundary_after: Vec<usize>) -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            boundary_after,
        }
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

impl SpeechEngine for MockEngine {
    fn create_recognizer(
        &self,
        sample_rate: f32,
        word_list: Option<&[String]>,
    ) -> Result<Box<dyn Recognizer>> {
        self.created
            .lock()
            .unwrap()
            .push((sample_rate, word_list.map(<[String]>::to_vec)));
        Ok(Box::new(MockRecognizer {
            chunks: 0,
            boundary_after: self.boundary_after.clone(),
        }))
    }
}

/// Scripted recognizer: responses embed the chunk count so tests can
/// verify ordering and per-session isolation
pub struct MockRecognizer {
    chunks: usize,
    boundary_after: Vec<usize>,
}

impl Recognizer for MockRecognizer {
    fn accept_waveform(&mut self, _bytes: &[u8]) -> bool {
        self.chunks += 1;
        self.boundary_after.contains(&self.chunks)
    }

    fn partial_result(&mut self) -> String {
        format!(r#"{{"partial": "chunk {}"}}"#, self.chunks)
    }

    fn result(&mut self) -> String {
        format!(r#"{{"text": "segment {}"}}"#, self.chunks)
    }

    fn final_result(&mut self) -> String {
        if self.chunks == 0 {
            r#"{"text": ""}"#.to_string()
        } else {
            format!(r#"{{"text": "final after {} chunks"}}"#, self.chunks)
        }
    }
}
