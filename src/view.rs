//! Renders the controller state as terminal text.

use crate::app::App;
use crate::selection::TranslationResult;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

pub const HELP: &str = "\
Commands:
  open <path>          open a .epub or .pdf file
  next | n             next chapter
  prev | p             previous chapter
  select <start> <end> highlight characters start..end of the chapter
  find <text>          highlight the first occurrence of text
  simplify | s         simplify the highlighted text
  copy                 copy the highlighted text and simplify it
  show                 redraw the screen
  help | h             toggle this help
  quit | q             exit";

/// Render the whole screen. Pure: the output depends only on `app`.
pub fn render(app: &App) -> String {
    if let Some(result) = app.modal() {
        return render_modal(result);
    }

    let mut out = String::new();
    render_header(app, &mut out);

    if let Ok(chapter) = app.current_chapter() {
        let _ = writeln!(out, "## {}", chapter.title);
        out.push('\n');
        out.push_str(&chapter.body);
        out.push('\n');
    }

    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Highlighted: {}", app.highlighted());
    let _ = writeln!(out, "Simplified:  {}", app.output());

    if let Some(status) = app.status() {
        let _ = writeln!(out, "» {status}");
    }
    if app.show_help() {
        out.push('\n');
        out.push_str(HELP);
        out.push('\n');
    }
    out
}

fn render_header(app: &App, out: &mut String) {
    let state = app.state();
    let Some((index, len)) = state.position() else {
        let _ = writeln!(out, "No document open. Type `open <path>` or `help`.");
        return;
    };

    let metadata = state.document().map(|doc| doc.metadata());
    let title = metadata
        .and_then(|m| m.title.as_deref())
        .unwrap_or("Untitled");
    let mut header = format!("{title}  |  Chapter {}/{}", index + 1, len);
    if let Some(m) = metadata {
        if !m.authors.is_empty() {
            let _ = write!(header, "  |  {}", m.authors.join(", "));
        }
        if let Some(language) = &m.language {
            let _ = write!(header, "  |  {language}");
        }
    }

    // only the enabled affordances are shown
    let mut nav = Vec::new();
    if state.can_retreat() {
        nav.push("[< prev]");
    }
    if state.can_advance() {
        nav.push("[next >]");
    }

    let _ = writeln!(out, "{header}  {}", nav.join(" "));
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
}

fn render_modal(result: &TranslationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "+-- Result {}", "-".repeat(RULE_WIDTH - 11));
    let _ = writeln!(out, "| Original:");
    push_indented(&mut out, &result.original);
    let _ = writeln!(out, "|");
    let _ = writeln!(out, "| Simplified:");
    push_indented(&mut out, &result.translated);
    let _ = writeln!(out, "+-- press Enter to dismiss {}", "-".repeat(RULE_WIDTH - 27));
    out
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        let _ = writeln!(out, "|   {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Event;
    use crate::config::InferenceConfig;
    use crate::inference::EchoService;
    use crate::reader::{Chapter, Document, Metadata};
    use crate::selection::TranslationFlow;

    fn app_with_book() -> App {
        let config = InferenceConfig::default();
        let mut app = App::new(TranslationFlow::new(
            Box::new(EchoService::new(config.prompt_template)),
            config,
        ));
        let doc = Document::new(vec![
            Chapter::new("Opening", "First body."),
            Chapter::new("Middle", "Second body."),
            Chapter::new("End", "Third body."),
        ])
        .with_metadata(Metadata {
            title: Some("A Book".into()),
            authors: vec!["Ann Author".into()],
            language: Some("en".into()),
        });
        app.load_result(Ok(doc));
        app
    }

    #[test]
    fn empty_reader_prompts_for_a_file() {
        let app = App::new(TranslationFlow::new(
            Box::new(crate::inference::PlaceholderService),
            InferenceConfig::default(),
        ));
        assert!(render(&app).starts_with("No document open."));
    }

    #[test]
    fn header_shows_only_enabled_navigation() {
        let mut app = app_with_book();
        let first = render(&app);
        assert!(first.starts_with("A Book  |  Chapter 1/3  |  Ann Author  |  en  [next >]"));
        assert!(first.contains("[next >]"));
        assert!(!first.contains("[< prev]"));

        app.handle(Event::Next);
        let middle = render(&app);
        assert!(middle.contains("[< prev] [next >]"));
        assert!(middle.contains("## Middle\n\nSecond body."));

        app.handle(Event::Next);
        assert!(!render(&app).contains("[next >]"));
    }

    #[test]
    fn header_omits_missing_metadata() {
        let mut app = App::new(TranslationFlow::new(
            Box::new(crate::inference::PlaceholderService),
            InferenceConfig::default(),
        ));
        app.load_result(Ok(Document::new(vec![Chapter::new("Only", "Body.")])));
        assert!(render(&app).starts_with("Untitled  |  Chapter 1/1  \n"));
    }

    #[test]
    fn modal_replaces_main_view() {
        let mut app = app_with_book();
        app.handle(Event::Find("body".into()));
        app.handle(Event::Simplify);

        let screen = render(&app);
        assert!(screen.starts_with("+-- Result"));
        assert!(screen.contains("| Original:\n|   body\n"));
        assert!(screen.contains("| Simplified:\n|   body\n"));
        assert!(!screen.contains("First body."));

        app.handle(Event::Dismiss);
        assert!(render(&app).contains("Simplified:  body"));
    }
}
