use clap::ValueEnum;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Instruction wrapped around every selection; `{text}` is replaced by the span.
pub const PROMPT_TEMPLATE: &str = "Rewrite the following passage in plain, simple language \
that a young reader could follow. Keep the meaning. Reply with the rewritten passage only.\n\n{text}";

/// Which text generation backend answers simplification requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Ollama-compatible HTTP server
    #[default]
    Ollama,
    /// Return the highlighted text unchanged
    Echo,
    /// Return a fixed placeholder reply
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub backend: Backend,
    pub endpoint: String,
    pub general_model: String,
    /// Second, specialised pass appended after the general one
    pub fine_tuned_model: Option<String>,
    pub timeout: Duration,
    pub prompt_template: &'static str,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            general_model: DEFAULT_MODEL.to_string(),
            fine_tuned_model: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            prompt_template: PROMPT_TEMPLATE,
        }
    }
}

impl InferenceConfig {
    /// Models to run, in order
    pub fn models(&self) -> Vec<String> {
        let mut models = vec![self.general_model.clone()];
        models.extend(self.fine_tuned_model.clone());
        models
    }

    pub fn build_prompt(&self, span: &str) -> String {
        self.prompt_template.replace("{text}", span)
    }
}
