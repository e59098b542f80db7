use crate::epub_reader::EpubData;
use crate::error::ExtractError;
use crate::pdf_reader::PdfData;
use crate::reader::{Document, DocumentExtractor};
use std::path::Path;
use tracing::info;

/// File formats the reader can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Epub,
    Pdf,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "epub" => Some(Self::Epub),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Open a PDF or EPUB file and return its chapters.
pub fn open_document(path: &Path) -> Result<Document, ExtractError> {
    let format = Format::from_path(path)
        .ok_or_else(|| ExtractError::unreadable(path, "unsupported file type (expected .epub or .pdf)"))?;

    let reader: Box<dyn DocumentExtractor> = match format {
        Format::Epub => Box::new(EpubData::open(path)?),
        Format::Pdf => Box::new(PdfData::open(path)?),
    };

    let document = reader.extract()?;
    info!(
        path = %path.display(),
        ?format,
        chapters = document.len(),
        "opened document"
    );
    Ok(document)
}
