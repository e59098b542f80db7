use crate::error::ExtractError;
use crate::reader::{default_title, Chapter, Document, DocumentExtractor, Metadata as BookMetadata};
use crate::text;
use rbook::prelude::*;
use rbook::Epub;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct EpubData {
    path: PathBuf,
    epub: Epub,
}

impl EpubData {
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let epub = Epub::options()
            .strict(false)
            .open(path)
            .map_err(|e| ExtractError::unreadable(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            epub,
        })
    }

    fn chapters(&self) -> Result<Vec<Chapter>, ExtractError> {
        let mut chapters = Vec::new();
        let mut reader = self.epub.reader();

        while let Some(result) = reader.read_next() {
            let data = result.map_err(|e| ExtractError::unreadable(&self.path, e))?;
            let html_content = data.content().to_string();
            let markdown = text::html_to_markdown(&html_content);
            let body = text::markdown_to_plain_text(&markdown);

            // Cover pages and image-only spine entries
            if body.is_empty() {
                continue;
            }

            let title = text::extract_title(&markdown)
                .unwrap_or_else(|| default_title(chapters.len()));
            debug!(chapter = chapters.len() + 1, %title, chars = body.len(), "read epub chapter");
            chapters.push(Chapter::new(title, body));
        }

        Ok(chapters)
    }

    fn metadata(&self) -> BookMetadata {
        let metadata = self.epub.metadata();
        BookMetadata {
            title: metadata.title().map(|t| t.value().to_string()),
            authors: metadata
                .creators()
                .map(|c| c.value().to_string())
                .collect(),
            language: metadata.languages().next().map(|l| l.value().to_string()),
        }
    }
}

impl DocumentExtractor for EpubData {
    fn extract(&self) -> Result<Document, ExtractError> {
        let chapters = self.chapters()?;
        if chapters.is_empty() {
            return Err(ExtractError::NoExtractableText {
                path: self.path.clone(),
            });
        }
        Ok(Document::new(chapters).with_metadata(self.metadata()))
    }
}
