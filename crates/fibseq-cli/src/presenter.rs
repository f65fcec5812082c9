//! Result presenters: coloured text and JSON.

use std::io::{self, Write};

use fibseq_core::{Mode, RunReport, Sequence, Statistics};

use crate::output::{format_columns, format_line, format_statistics};
use crate::ui::Palette;

/// Trait for presenting a finished run to the user.
pub trait ReportPresenter {
    /// Write the report to `out`.
    fn present(&self, out: &mut dyn Write, report: &RunReport) -> io::Result<()>;

    /// Whether the output is machine-readable. Notices and errors must then
    /// stay out of the report stream.
    fn is_structured(&self) -> bool {
        false
    }
}

/// Coloured text presenter, matching the interactive layout.
#[derive(Debug, Clone, Default)]
pub struct TextPresenter {
    palette: Palette,
}

impl TextPresenter {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn sequence(&self, out: &mut dyn Write, seq: &Sequence, columns: bool) -> io::Result<()> {
        if columns {
            let heading = format!("Fibonacci Sequence ({} terms):", seq.len());
            writeln!(out, "{}", self.palette.header.apply_to(heading))?;
            writeln!(out)?;
            write!(out, "{}", format_columns(seq.terms()))?;
        } else {
            writeln!(out, "{}", self.palette.header.apply_to("Fibonacci Sequence:"))?;
            write!(out, "{}", format_line(seq.terms()))?;
        }
        writeln!(out)?;
        writeln!(out)
    }

    fn statistics(&self, out: &mut dyn Write, stats: &Statistics) -> io::Result<()> {
        writeln!(out, "{}", self.palette.summary.apply_to("Statistics:"))?;
        for line in format_statistics(stats) {
            writeln!(out, "{line}")?;
        }
        writeln!(out)
    }

    fn bounded(&self, out: &mut dyn Write, max_value: i64, seq: &Sequence) -> io::Result<()> {
        let heading = format!("Fibonacci Sequence up to {max_value}:");
        writeln!(out, "{}", self.palette.header.apply_to(heading))?;
        writeln!(out)?;
        write!(out, "{}", format_line(seq.terms()))?;
        writeln!(out)?;
        writeln!(out)?;
        let total = format!("Total terms generated: {}", seq.len());
        writeln!(out, "{}", self.palette.summary.apply_to(total))?;
        writeln!(out)
    }
}

impl ReportPresenter for TextPresenter {
    fn present(&self, out: &mut dyn Write, report: &RunReport) -> io::Result<()> {
        match report.mode {
            Mode::ByMaximum => self.bounded(out, report.value, &report.sequence)?,
            Mode::ByCount | Mode::WithStats => self.sequence(out, &report.sequence, false)?,
            Mode::InColumns => self.sequence(out, &report.sequence, true)?,
        }
        if let Some(stats) = &report.statistics {
            self.statistics(out, stats)?;
        }
        out.flush()
    }
}

/// JSON presenter for scripted use.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter {
    pretty: bool,
}

impl JsonPresenter {
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportPresenter for JsonPresenter {
    fn present(&self, out: &mut dyn Write, report: &RunReport) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, report)?;
        } else {
            serde_json::to_writer(&mut *out, report)?;
        }
        writeln!(out)?;
        out.flush()
    }

    fn is_structured(&self) -> bool {
        true
    }
}
