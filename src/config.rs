//! Process configuration
//!
//! Startup-time settings only: the endpoint address, the model path,
//! and the default sample rate. Per-session configuration arrives over
//! the wire (see `protocol`).

use std::path::PathBuf;

use clap::Parser;

/// WebSocket worker for the Vosk speech recognition engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL of the WebSocket endpoint the worker connects to
    #[arg(short, long, default_value = "ws://localhost:20005/decoder")]
    pub url: String,

    /// Path to the Vosk model directory
    #[arg(short, long)]
    pub model: PathBuf,

    /// Default audio sample rate, used until a configuration message
    /// overrides it
    #[arg(short, long, default_value_t = 16000.0)]
    pub rate: f32,

    /// Allow word lists from configuration messages to constrain the
    /// recognizer (not every model supports this)
    #[arg(long)]
    pub enable_word_list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runtime settings derived from the command line
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub model_path: PathBuf,
    pub sample_rate: f32,
    pub enable_word_list: bool,
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            url: args.url.clone(),
            model_path: args.model.clone(),
            sample_rate: args.rate,
            enable_word_list: args.enable_word_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["vosk-worker", "--model", "/tmp/model"]);
        assert_eq!(args.url, "ws://localhost:20005/decoder");
        assert_eq!(args.rate, 16000.0);
        assert!(!args.enable_word_list);
        assert!(!args.verbose);
    }

    #[test]
    fn test_settings_from_args() {
        let args = Args::parse_from([
            "vosk-worker",
            "-u",
            "ws://decoder:9000/ws",
            "-m",
            "/opt/model",
            "-r",
            "8000",
            "--enable-word-list",
        ]);
        let settings = Settings::from(&args);
        assert_eq!(settings.url, "ws://decoder:9000/ws");
        assert_eq!(settings.model_path, PathBuf::from("/opt/model"));
        assert_eq!(settings.sample_rate, 8000.0);
        assert!(settings.enable_word_list);
    }
}
