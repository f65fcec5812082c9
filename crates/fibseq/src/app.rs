//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use fibseq_cli::presenter::{JsonPresenter, ReportPresenter, TextPresenter};
use fibseq_cli::screen::{NoClear, ScreenClearer, TermClearer};
use fibseq_core::Choice;

use crate::config::AppConfig;
use crate::session::Session;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibseq_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Some((mode, value)) = config.scripted() {
        return run_scripted(config, mode, value, stdout.lock());
    }

    let clearer: &dyn ScreenClearer = if config.no_clear { &NoClear } else { &TermClearer };
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.palette());
    session.run(clearer, !config.no_pause)?;
    Ok(())
}

/// Run one mode from command-line arguments and print the result.
pub fn run_scripted<W: Write>(config: &AppConfig, mode: &str, value: &str, out: W) -> Result<()> {
    let choice = Choice::parse(mode);
    debug!(?choice, value, json = config.json, "scripted run");

    let presenter: Box<dyn ReportPresenter> = if config.json {
        Box::new(JsonPresenter::new(false))
    } else {
        Box::new(TextPresenter::new(config.palette()))
    };
    let mut session = Session::with_presenter(io::empty(), out, config.palette(), presenter);
    session.run_once(choice, value)?;
    Ok(())
}
