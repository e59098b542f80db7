use crate::config::{Backend, InferenceConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::logging::LogFormat;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Read EPUB and PDF books chapter by chapter and simplify highlighted passages
#[derive(Parser, Debug)]
#[command(name = "simplify-reader", version, about)]
pub struct Cli {
    /// EPUB or PDF file to open on start-up
    pub input: Option<PathBuf>,

    /// Backend that produces the simplified text
    #[arg(short, long, value_enum, default_value_t = Backend::Ollama)]
    pub backend: Backend,

    /// Base URL of the Ollama-compatible server
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// General-purpose model used for the first pass
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Fine-tuned model for a second pass, appended after the first
    #[arg(long)]
    pub fine_tuned_model: Option<String>,

    /// Seconds to wait for each inference call
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Compact)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    pub fn inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            backend: self.backend,
            endpoint: self.endpoint.clone(),
            general_model: self.model.clone(),
            fine_tuned_model: self.fine_tuned_model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..InferenceConfig::default()
        }
    }
}
