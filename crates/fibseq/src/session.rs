//! The interactive session: menu, one numeric answer, output, exit gate.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use fibseq_cli::presenter::{ReportPresenter, TextPresenter};
use fibseq_cli::screen::ScreenClearer;
use fibseq_cli::ui::{Palette, Ui};
use fibseq_core::{parse_max_value, parse_term_count, Choice, Mode, RunReport};

/// Drives one run of the generator over the given input and output.
pub struct Session<R, W> {
    input: R,
    out: W,
    ui: Ui,
    presenter: Box<dyn ReportPresenter>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Session with the coloured text presenter.
    pub fn new(input: R, out: W, palette: Palette) -> Self {
        let presenter = Box::new(TextPresenter::new(palette.clone()));
        Self::with_presenter(input, out, palette, presenter)
    }

    pub fn with_presenter(
        input: R,
        out: W,
        palette: Palette,
        presenter: Box<dyn ReportPresenter>,
    ) -> Self {
        Self {
            input,
            out,
            ui: Ui::new(palette),
            presenter,
        }
    }

    /// Run the full interactive flow.
    ///
    /// Returns the report of the generated sequence, or `None` when the
    /// answer was rejected.
    pub fn run(&mut self, clearer: &dyn ScreenClearer, pause: bool) -> Result<Option<RunReport>> {
        clearer.clear().context("failed to clear the screen")?;
        self.ui.banner(&mut self.out)?;
        self.ui.menu(&mut self.out)?;

        let choice = Choice::parse(&self.read_line()?);
        writeln!(self.out)?;
        debug!(?choice, "menu choice");

        if choice == Choice::Invalid {
            self.ui.invalid_choice(&mut self.out)?;
        }
        match choice {
            Choice::Mode(mode) if !mode.takes_term_count() => {
                self.ui.prompt_max_value(&mut self.out)?;
            }
            _ => self.ui.prompt_term_count(&mut self.out)?,
        }
        let raw = self.read_line()?;
        writeln!(self.out)?;

        let report = self.answer(choice, &raw)?;

        if pause {
            self.ui.exit_prompt(&mut self.out)?;
            self.read_line()?;
        }
        Ok(report)
    }

    /// Run a single choice with an already known answer, without menu,
    /// prompts or exit gate.
    pub fn run_once(&mut self, choice: Choice, raw: &str) -> Result<Option<RunReport>> {
        if choice == Choice::Invalid {
            let mut notices = notice_sink(&mut self.out, self.presenter.is_structured());
            self.ui.invalid_choice(&mut notices)?;
        }
        self.answer(choice, raw)
    }

    /// Validate the answer for `choice`, then print the sequence or the
    /// error.
    ///
    /// The invalid-choice fallback generates by count but neither reports a
    /// rejected answer nor warns when the count is clamped.
    fn answer(&mut self, choice: Choice, raw: &str) -> Result<Option<RunReport>> {
        let structured = self.presenter.is_structured();
        let report = match choice {
            Choice::Mode(Mode::ByMaximum) => match parse_max_value(raw) {
                Ok(max_value) => RunReport::for_max(max_value),
                Err(err) => {
                    self.ui.error(&mut notice_sink(&mut self.out, structured), &err)?;
                    return Ok(None);
                }
            },
            Choice::Mode(mode) => match parse_term_count(raw) {
                Ok(request) => {
                    if request.is_clamped() {
                        self.ui
                            .clamp_warning(&mut notice_sink(&mut self.out, structured))?;
                    }
                    RunReport::for_count(mode, request)
                }
                Err(err) => {
                    self.ui.error(&mut notice_sink(&mut self.out, structured), &err)?;
                    return Ok(None);
                }
            },
            Choice::Invalid => match parse_term_count(raw) {
                Ok(request) => RunReport::for_count(Mode::ByCount, request),
                Err(err) => {
                    debug!(%err, "fallback answer rejected");
                    return Ok(None);
                }
            },
        };

        debug!(mode = ?report.mode, terms = report.sequence.len(), "presenting report");
        self.presenter.present(&mut self.out, &report)?;
        Ok(Some(report))
    }

    /// Read one line; end of input reads as an empty line.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("failed to read from standard input")?;
        Ok(line)
    }

    /// Consume the session and return the output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Where warnings and errors go: the main output, or stderr when the main
/// output is machine-readable.
fn notice_sink<W: Write>(out: &mut W, structured: bool) -> Box<dyn Write + '_> {
    if structured {
        Box::new(io::stderr().lock())
    } else {
        Box::new(out)
    }
}
