use anyhow::{Context, Result};
use clap::Parser;
use simplify_reader::app::{App, Event};
use simplify_reader::cli::Cli;
use simplify_reader::inference;
use simplify_reader::logging::{init_logging, LogConfig};
use simplify_reader::selection::TranslationFlow;
use simplify_reader::session;
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig {
        format: cli.log_format.into(),
        with_ansi: io::stderr().is_terminal(),
        ..LogConfig::from_verbosity(cli.verbose)
    };
    init_logging(&log_config).context("Failed to initialize logging")?;

    let config = cli.inference_config();
    let service = inference::build_service(&config).context("Failed to set up inference backend")?;
    let mut app = App::new(TranslationFlow::new(service, config));

    if let Some(path) = cli.input {
        app.handle(Event::Open(path));
    }

    session::run(&mut app, io::stdin().lock(), io::stdout().lock())
        .context("Terminal I/O failed")
}
