//! Selection capture and the selection-to-translation flow.

use crate::config::InferenceConfig;
use crate::error::{InferenceError, SelectionError};
use crate::inference::InferenceService;
use std::cell::Cell;
use tracing::{info, warn};

/// Character offsets into the displayed chapter body, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Offsets may arrive in either order (backwards drags).
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// Select the first occurrence of `needle` in `body`.
    pub fn find(body: &str, needle: &str) -> Result<Self, SelectionError> {
        if needle.trim().is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        let byte = body
            .find(needle)
            .ok_or_else(|| SelectionError::NotFound(needle.to_string()))?;
        let start = body[..byte].chars().count();
        Ok(Self::new(start, start + needle.chars().count()))
    }

    /// The selected text with surrounding whitespace removed.
    pub fn capture<'a>(&self, body: &'a str) -> Result<&'a str, SelectionError> {
        let len = body.chars().count();
        if self.end > len {
            return Err(SelectionError::SelectionOutOfRange {
                start: self.start,
                end: self.end,
                len,
            });
        }

        let byte_at = |n: usize| {
            body.char_indices()
                .nth(n)
                .map_or(body.len(), |(i, _)| i)
        };
        let span = body[byte_at(self.start)..byte_at(self.end)].trim();
        if span.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        Ok(span)
    }
}

/// Original span and generated text, kept only while the result view is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
}

/// Literal text shown in place of a failed pass
pub fn diagnostic(err: &InferenceError) -> String {
    format!("Error: {err}")
}

pub struct TranslationFlow {
    service: Box<dyn InferenceService>,
    config: InferenceConfig,
    busy: Cell<bool>,
}

struct BusyGuard<'a>(&'a Cell<bool>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl TranslationFlow {
    pub fn new(service: Box<dyn InferenceService>, config: InferenceConfig) -> Self {
        Self {
            service,
            config,
            busy: Cell::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Capture `selection` from `body` and run every configured pass over it.
    pub fn translate_selection(
        &self,
        body: &str,
        selection: Selection,
    ) -> Result<TranslationResult, SelectionError> {
        let span = selection.capture(body)?;
        self.translate(span)
    }

    /// Run every configured pass over `span`.
    ///
    /// Inference failures never surface as errors: the failing pass is
    /// replaced by its diagnostic text and the other passes are kept.
    pub fn translate(&self, span: &str) -> Result<TranslationResult, SelectionError> {
        let span = span.trim();
        if span.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        if self.busy.replace(true) {
            return Err(SelectionError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        let prompt = self.config.build_prompt(span);
        let outputs: Vec<String> = self
            .config
            .models()
            .iter()
            .map(|model| match self.service.generate(model, &prompt) {
                Ok(text) => text,
                Err(err) => {
                    warn!(model = %model, error = %err, "inference failed");
                    diagnostic(&err)
                }
            })
            .collect();

        info!(chars = span.chars().count(), passes = outputs.len(), "simplified selection");
        Ok(TranslationResult {
            original: span.to_string(),
            translated: outputs.join("\n\n"),
        })
    }
}
