//! Reader state and chapter navigation.

use crate::error::ReaderError;
use crate::reader::{Chapter, Document};
use tracing::debug;

/// What the reader currently holds. The index is only meaningful while loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReaderState {
    #[default]
    Empty,
    Loaded { document: Document, index: usize },
}

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move<'a> {
    Moved(&'a Chapter),
    AtFirstChapter,
    AtLastChapter,
}

impl ReaderState {
    /// Replace whatever is loaded. An empty document clears the state and fails.
    pub fn load(&mut self, document: Document) -> Result<&Chapter, ReaderError> {
        if document.is_empty() {
            *self = Self::Empty;
            return Err(ReaderError::EmptyDocument);
        }
        *self = Self::Loaded { document, index: 0 };
        self.current_chapter()
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn current_chapter(&self) -> Result<&Chapter, ReaderError> {
        match self {
            Self::Empty => Err(ReaderError::NoDocumentLoaded),
            Self::Loaded { document, index } => {
                document.chapter(*index).ok_or(ReaderError::NoDocumentLoaded)
            }
        }
    }

    pub fn advance(&mut self) -> Result<Move<'_>, ReaderError> {
        let Self::Loaded { document, index } = self else {
            return Err(ReaderError::NoDocumentLoaded);
        };
        if *index + 1 >= document.len() {
            return Ok(Move::AtLastChapter);
        }
        *index += 1;
        debug!(index = *index, "advanced");
        Ok(Move::Moved(&document.chapters()[*index]))
    }

    pub fn retreat(&mut self) -> Result<Move<'_>, ReaderError> {
        let Self::Loaded { document, index } = self else {
            return Err(ReaderError::NoDocumentLoaded);
        };
        if *index == 0 {
            return Ok(Move::AtFirstChapter);
        }
        *index -= 1;
        debug!(index = *index, "retreated");
        Ok(Move::Moved(&document.chapters()[*index]))
    }

    pub fn can_advance(&self) -> bool {
        matches!(self, Self::Loaded { document, index } if *index + 1 < document.len())
    }

    pub fn can_retreat(&self) -> bool {
        matches!(self, Self::Loaded { index, .. } if *index > 0)
    }

    /// `(index, chapter count)` while loaded
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Empty => None,
            Self::Loaded { document, index } => Some((*index, document.len())),
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            Self::Empty => None,
            Self::Loaded { document, .. } => Some(document),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}
