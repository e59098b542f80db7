//! Line-oriented event loop.
//!
//! One command per input line; each is turned into an [`Event`], handled to
//! completion, and the screen is redrawn before the next line is read.

use crate::app::{App, Event};
use crate::view;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Parse one command line. `Ok(None)` means there is nothing to do.
pub fn parse_command(line: &str, modal_open: bool) -> Result<Option<Event>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(modal_open.then_some(Event::Dismiss));
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, r)| (c, r.trim()));

    let event = match command.to_ascii_lowercase().as_str() {
        "open" if !rest.is_empty() => Event::Open(PathBuf::from(rest)),
        "open" => return Err("usage: open <path>".to_string()),
        "next" | "n" => Event::Next,
        "prev" | "p" => Event::Prev,
        "select" => {
            let offsets: Vec<usize> = rest
                .split_whitespace()
                .map(str::parse::<usize>)
                .collect::<Result<_, _>>()
                .map_err(|_| "usage: select <start> <end>".to_string())?;
            match offsets[..] {
                [start, end] => Event::Select { start, end },
                _ => return Err("usage: select <start> <end>".to_string()),
            }
        }
        "find" if !rest.is_empty() => Event::Find(rest.to_string()),
        "find" => return Err("usage: find <text>".to_string()),
        "copy" => Event::Copy,
        "simplify" | "s" => Event::Simplify,
        "dismiss" | "close" => Event::Dismiss,
        "show" => Event::Show,
        "help" | "h" | "?" => Event::Help,
        "quit" | "q" | "exit" => Event::Quit,
        other => return Err(format!("unknown command '{other}' (type `help`)")),
    };
    Ok(Some(event))
}

/// Drive `app` from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, mut output: W) -> io::Result<()> {
    write!(output, "{}> ", view::render(app))?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line, app.modal().is_some()) {
            Ok(Some(event)) => app.handle(event),
            Ok(None) => {}
            Err(usage) => {
                debug!(%line, "rejected command");
                writeln!(output, "» {usage}")?;
            }
        }

        if app.should_quit() {
            break;
        }
        write!(output, "{}> ", view::render(app))?;
        output.flush()?;
    }

    Ok(())
}
