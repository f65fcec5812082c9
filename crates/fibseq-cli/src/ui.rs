//! Banner, menu, prompts and messages for the interactive session.

use std::io::{self, Write};

use console::Style;

use fibseq_core::{InputError, Mode, MAX_TERMS};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

// console renders `bright()` as a 256-colour code, so gray is written as
// plain SGR 90.
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Styles for each kind of output.
///
/// When enabled, styling is forced on so escape codes are written even when
/// stdout is not a terminal.
#[derive(Debug, Clone)]
pub struct Palette {
    pub banner: Style,
    pub menu: Style,
    pub header: Style,
    pub summary: Style,
    pub error: Style,
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        let base = Style::new().force_styling(enabled);
        Self {
            banner: base.clone().green(),
            menu: base.clone().yellow(),
            header: base.clone().cyan(),
            summary: base.clone().magenta(),
            error: base.red(),
            enabled,
        }
    }

    /// Gray text for secondary prompts.
    #[must_use]
    pub fn muted(&self, text: &str) -> String {
        if self.enabled {
            format!("{GRAY}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Plain palette that never emits escape codes.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(!is_color_disabled())
    }
}

const RULE: &str = "===============================================";
const TITLE: &str = "      Enhanced Fibonacci Sequence Generator    ";

/// Writes the fixed parts of the interactive session.
#[derive(Debug, Clone, Default)]
pub struct Ui {
    palette: Palette,
}

impl Ui {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn banner(&self, out: &mut dyn Write) -> io::Result<()> {
        let style = &self.palette.banner;
        writeln!(out, "{}", style.apply_to(RULE))?;
        writeln!(out, "{}", style.apply_to(TITLE))?;
        writeln!(out, "{}", style.apply_to(RULE))?;
        writeln!(out)
    }

    /// Print the menu and the choice prompt (no trailing newline).
    pub fn menu(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.palette.menu.apply_to("Generation Options:"))?;
        for mode in Mode::ALL {
            writeln!(out, "  {}. {}", mode.number(), mode.label())?;
        }
        writeln!(out)?;
        write!(out, "Enter your choice (1-4): ")?;
        out.flush()
    }

    pub fn prompt_term_count(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(
            out,
            "Enter the number of terms to generate (max {MAX_TERMS}): "
        )?;
        out.flush()
    }

    pub fn prompt_max_value(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "Enter the maximum value: ")?;
        out.flush()
    }

    pub fn error(&self, out: &mut dyn Write, err: &InputError) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.palette.error.apply_to(format!("Error: {err}"))
        )
    }

    pub fn clamp_warning(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.palette
                .error
                .apply_to(format!("Error: Maximum {MAX_TERMS} terms supported with i64."))
        )?;
        writeln!(out, "Using {MAX_TERMS} terms instead.")?;
        writeln!(out)
    }

    pub fn invalid_choice(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.palette
                .error
                .apply_to("Invalid choice. Using default mode (option 1).")
        )?;
        writeln!(out)
    }

    pub fn exit_prompt(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.palette.muted("Press ENTER to exit..."))?;
        out.flush()
    }
}
