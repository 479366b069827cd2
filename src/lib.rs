//! Vosk WebSocket Worker Library
//!
//! Bridges a persistent WebSocket connection to the Vosk speech
//! recognition engine: binary audio frames in, JSON hypotheses out.

pub mod asr;
pub mod config;
pub mod error;
pub mod pool;
pub mod processor;
pub mod protocol;
pub mod session;
pub mod supervisor;
