//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibseq_cli::ui::{is_color_disabled, Palette};

/// fibseq — print Fibonacci sequences by count, by maximum value, with
/// statistics, or in columns.
///
/// Without `--mode` the program asks for a menu choice and a value on
/// standard input.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Display mode for a non-interactive run: 1 = by count, 2 = up to a
    /// maximum value, 3 = with statistics, 4 = in columns.
    #[arg(short, long, requires = "value", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Term count (modes 1, 3, 4) or maximum value (mode 2).
    #[arg(short = 'n', long, requires = "mode", allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Print the result as JSON (non-interactive runs only).
    #[arg(long, requires = "mode")]
    pub json: bool,

    /// Disable coloured output. `NO_COLOR` is honoured as well.
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the terminal on start.
    #[arg(long)]
    pub no_clear: bool,

    /// Do not wait for ENTER before exiting.
    #[arg(long)]
    pub no_pause: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Mode and value when both were given on the command line.
    #[must_use]
    pub fn scripted(&self) -> Option<(&str, &str)> {
        self.mode.as_deref().zip(self.value.as_deref())
    }

    /// Colour palette after applying `--no-color` and `NO_COLOR`.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(!self.no_color && !is_color_disabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("fibseq").chain(args.iter().copied()))
    }

    #[test]
    fn interactive_by_default() {
        let config = parse(&[]).unwrap();
        assert!(config.scripted().is_none());
        assert!(!config.no_pause);
    }

    #[test]
    fn scripted_mode_and_value() {
        let config = parse(&["--mode", "3", "--value", "10"]).unwrap();
        assert_eq!(config.scripted(), Some(("3", "10")));
    }

    #[test]
    fn negative_value_is_accepted_for_validation() {
        let config = parse(&["-m", "2", "-n", "-5"]).unwrap();
        assert_eq!(config.scripted(), Some(("2", "-5")));
    }

    #[test]
    fn mode_requires_value() {
        assert!(parse(&["--mode", "1"]).is_err());
        assert!(parse(&["--value", "1"]).is_err());
    }

    #[test]
    fn json_requires_mode() {
        assert!(parse(&["--json"]).is_err());
        assert!(parse(&["--json", "-m", "1", "-n", "5"]).unwrap().json);
    }

    #[test]
    fn no_color_flag_gives_plain_palette() {
        let config = parse(&["--no-color"]).unwrap();
        let styled = config.palette().header.apply_to("x").to_string();
        assert_eq!(styled, "x");
    }
}
