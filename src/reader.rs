use crate::error::ExtractError;

/// Shared chapter representation across all input formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    /// Plain text, paragraphs separated by a blank line
    pub body: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Shared metadata representation across all input formats
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub language: Option<String>,
}

/// An ordered, immutable sequence of chapters loaded from one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    chapters: Vec<Chapter>,
    metadata: Metadata,
}

impl Document {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters,
            metadata: Metadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Trait for reading document formats (EPUB, PDF)
pub trait DocumentExtractor {
    /// Extract the whole document as plain-text chapters
    fn extract(&self) -> Result<Document, ExtractError>;
}

/// Positional fallback used when a source supplies no chapter title
pub fn default_title(index: usize) -> String {
    format!("Chapter {}", index + 1)
}
