//! PDF extraction backed by `pdf-extract`.
//!
//! `pdf-extract` hands back the whole document as one string with a form feed
//! between pages. Pages are grouped into fixed-size chapters since PDFs carry
//! no reliable chapter structure.

use crate::error::ExtractError;
use crate::reader::{default_title, Chapter, Document, DocumentExtractor};
use crate::text;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Number of pages per chapter grouping.
pub const PAGES_PER_CHAPTER: usize = 10;

pub struct PdfData {
    path: PathBuf,
}

impl PdfData {
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        if !path.is_file() {
            return Err(ExtractError::unreadable(path, "file not found"));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    fn raw_text(&self) -> Result<String, ExtractError> {
        // pdf-extract panics on some malformed inputs
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(&self.path))) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractError::unreadable(&self.path, e)),
            Err(_) => {
                warn!(path = %self.path.display(), "pdf parser panicked");
                Err(ExtractError::unreadable(&self.path, "malformed PDF"))
            }
        }
    }
}

impl DocumentExtractor for PdfData {
    fn extract(&self) -> Result<Document, ExtractError> {
        let chapters = paginate(&self.raw_text()?);
        if chapters.is_empty() {
            return Err(ExtractError::NoExtractableText {
                path: self.path.clone(),
            });
        }
        debug!(path = %self.path.display(), chapters = chapters.len(), "read pdf");
        Ok(Document::new(chapters))
    }
}

/// Splits form-feed separated pages into chapters of [`PAGES_PER_CHAPTER`] non-empty pages.
pub fn paginate(raw: &str) -> Vec<Chapter> {
    let pages: Vec<String> = raw
        .split('\x0C')
        .map(text::clean_text)
        .filter(|page| !page.is_empty())
        .collect();

    pages
        .chunks(PAGES_PER_CHAPTER)
        .enumerate()
        .map(|(i, group)| Chapter::new(default_title(i), group.join("\n\n")))
        .collect()
}
