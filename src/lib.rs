//! Terminal reader for EPUB and PDF books that simplifies highlighted passages
//! with a locally hosted language model.

pub mod app;
pub mod cli;
pub mod config;
pub mod epub_reader;
pub mod error;
pub mod extract;
pub mod inference;
pub mod logging;
pub mod pdf_reader;
pub mod reader;
pub mod selection;
pub mod session;
pub mod state;
pub mod text;
pub mod view;
