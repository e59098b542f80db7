//! Application controller.
//!
//! [`App`] owns the reader state and every display field. Each [`Event`] is
//! handled to completion and the view is re-rendered from the resulting state.

use crate::error::{ExtractError, ReaderError, SelectionError};
use crate::extract;
use crate::reader::{Chapter, Document};
use crate::selection::{Selection, TranslationFlow, TranslationResult};
use crate::state::{Move, ReaderState};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Discrete UI events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A file was chosen in the open dialog
    Open(PathBuf),
    Next,
    Prev,
    /// Selection changed in the chapter body
    Select { start: usize, end: usize },
    /// Select the first occurrence of the text
    Find(String),
    /// Selection copied; simplified like a button press
    Copy,
    /// Simplify button pressed
    Simplify,
    /// Close the result view
    Dismiss,
    Show,
    Help,
    Quit,
}

pub struct App {
    state: ReaderState,
    flow: TranslationFlow,
    selection: Option<Selection>,
    highlighted: String,
    output: String,
    status: Option<String>,
    modal: Option<TranslationResult>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(flow: TranslationFlow) -> Self {
        Self {
            state: ReaderState::default(),
            flow,
            selection: None,
            highlighted: String::new(),
            output: String::new(),
            status: None,
            modal: None,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn handle(&mut self, event: Event) {
        debug!(?event, "handling event");

        if self.modal.is_some() && !matches!(event, Event::Dismiss | Event::Quit) {
            self.status = Some("Close the result first (press Enter).".to_string());
            return;
        }

        self.status = None;
        match event {
            Event::Open(path) => self.open(path),
            Event::Next => self.navigate(true),
            Event::Prev => self.navigate(false),
            Event::Select { start, end } => self.select(Ok(Selection::new(start, end))),
            Event::Find(needle) => {
                let selection = self
                    .current_chapter()
                    .map_err(SelectionError::from)
                    .and_then(|chapter| Selection::find(&chapter.body, &needle));
                self.select(selection);
            }
            Event::Copy | Event::Simplify => self.simplify(),
            Event::Dismiss => self.modal = None,
            Event::Show => {}
            Event::Help => self.show_help = !self.show_help,
            Event::Quit => self.should_quit = true,
        }
    }

    fn open(&mut self, path: PathBuf) {
        let result = extract::open_document(&path);
        self.load_result(result);
    }

    /// Apply the outcome of an extraction. Any failure leaves the reader empty.
    pub fn load_result(&mut self, result: Result<Document, ExtractError>) {
        self.clear_selection();
        self.output.clear();

        let document = match result {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "could not open document");
                self.state.clear();
                self.status = Some(err.to_string());
                return;
            }
        };

        match self.state.load(document) {
            Ok(chapter) => info!(title = %chapter.title, "document loaded"),
            Err(err) => {
                warn!(error = %err, "rejected document");
                self.status = Some(err.to_string());
            }
        }
    }

    fn navigate(&mut self, forward: bool) {
        let outcome = if forward {
            self.state.advance()
        } else {
            self.state.retreat()
        };

        let message = match outcome {
            Ok(Move::Moved(_)) => None,
            Ok(Move::AtLastChapter) => Some("Already at the last chapter.".to_string()),
            Ok(Move::AtFirstChapter) => Some("Already at the first chapter.".to_string()),
            Err(err) => Some(err.to_string()),
        };

        match message {
            None => self.clear_selection(),
            Some(message) => self.status = Some(message),
        }
    }

    fn select(&mut self, selection: Result<Selection, SelectionError>) {
        let captured = selection.and_then(|selection| {
            let chapter = self.state.current_chapter()?;
            let span = selection.capture(&chapter.body)?;
            Ok((selection, span.to_string()))
        });

        match captured {
            Ok((selection, span)) => {
                self.selection = Some(selection);
                self.highlighted = span;
            }
            Err(err) => {
                self.clear_selection();
                self.status = Some(err.to_string());
            }
        }
    }

    fn simplify(&mut self) {
        let Some(selection) = self.selection else {
            self.status = Some(SelectionError::EmptySelection.to_string());
            return;
        };

        let result = match self.state.current_chapter() {
            Ok(chapter) => self.flow.translate_selection(&chapter.body, selection),
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(result) => {
                self.output = result.translated.clone();
                self.modal = Some(result);
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.highlighted.clear();
    }

    pub fn state(&self) -> &ReaderState {
        &self.state
    }

    pub fn current_chapter(&self) -> Result<&Chapter, ReaderError> {
        self.state.current_chapter()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn highlighted(&self) -> &str {
        &self.highlighted
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn modal(&self) -> Option<&TranslationResult> {
        self.modal.as_ref()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
