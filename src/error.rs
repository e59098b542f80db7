use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a file on disk into a [`crate::reader::Document`].
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read {}: {reason}", path.display())]
    UnreadableFile { path: PathBuf, reason: String },

    #[error("no readable text found in {}", path.display())]
    NoExtractableText { path: PathBuf },
}

impl ExtractError {
    pub fn unreadable(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::UnreadableFile {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReaderError {
    #[error("the document has no chapters")]
    EmptyDocument,

    #[error("no document loaded")]
    NoDocumentLoaded,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("nothing is highlighted")]
    EmptySelection,

    #[error("selection {start}..{end} is outside the chapter ({len} characters)")]
    SelectionOutOfRange { start: usize, end: usize, len: usize },

    #[error("\"{0}\" does not appear in this chapter")]
    NotFound(String),

    #[error("a simplification is already running")]
    Busy,

    #[error(transparent)]
    Reader(#[from] ReaderError),
}

/// Anything that goes wrong between sending a prompt and receiving generated text.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model '{0}' not found")]
    ModelNotFound(String),

    #[error("request timed out")]
    Timeout,

    #[error("inference server returned HTTP {0}")]
    Status(u16),

    #[error("unexpected response from inference server: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
