//! Menu choices and validation of numeric answers.

use serde::Serialize;
use tracing::warn;

use crate::constants::MAX_TERMS;
use crate::error::InputError;

/// Display mode selected from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Fixed number of terms on one line.
    ByCount,
    /// Every term up to a maximum value.
    ByMaximum,
    /// Fixed number of terms followed by statistics.
    WithStats,
    /// Fixed number of terms in a table.
    InColumns,
}

impl Mode {
    /// All modes in menu order.
    pub const ALL: [Mode; 4] = [
        Mode::ByCount,
        Mode::ByMaximum,
        Mode::WithStats,
        Mode::InColumns,
    ];

    /// Menu number of this mode (1-4).
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Mode::ByCount => 1,
            Mode::ByMaximum => 2,
            Mode::WithStats => 3,
            Mode::InColumns => 4,
        }
    }

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::ByCount => "Generate by number of terms",
            Mode::ByMaximum => "Generate up to a maximum value",
            Mode::WithStats => "Display with statistics",
            Mode::InColumns => "Display in columns",
        }
    }

    /// Whether this mode takes a term count (as opposed to a maximum value).
    #[must_use]
    pub fn takes_term_count(self) -> bool {
        !matches!(self, Mode::ByMaximum)
    }
}

/// A parsed menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Mode(Mode),
    /// Anything that is not 1-4, including unparsable input.
    Invalid,
}

impl Choice {
    /// Parse a menu answer. Unparsable input counts as choice 0.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let number: i64 = raw.trim().parse().unwrap_or(0);
        Self::from_number(number)
    }

    /// Map a menu number to a choice.
    #[must_use]
    pub fn from_number(number: i64) -> Self {
        Mode::ALL
            .into_iter()
            .find(|mode| i64::from(mode.number()) == number)
            .map_or(Choice::Invalid, Choice::Mode)
    }
}

/// A validated term count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRequest {
    /// Number of terms to generate, in `1..=MAX_TERMS`.
    pub count: usize,
    /// The original request when it exceeded [`MAX_TERMS`].
    pub clamped_from: Option<u64>,
}

impl TermRequest {
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.clamped_from.is_some()
    }
}

/// Parse and validate a term count answer.
///
/// # Errors
///
/// [`InputError::NotPositive`] if the answer is not an `i64` or is not
/// positive. Numbers outside the `i64` range are rejected, not clamped.
pub fn parse_term_count(raw: &str) -> Result<TermRequest, InputError> {
    let requested: u64 = match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => n.unsigned_abs(),
        _ => {
            warn!(input = raw.trim(), "rejected term count");
            return Err(InputError::NotPositive);
        }
    };

    match usize::try_from(requested) {
        Ok(count) if count <= MAX_TERMS => Ok(TermRequest {
            count,
            clamped_from: None,
        }),
        _ => {
            warn!(requested, max = MAX_TERMS, "term count clamped");
            Ok(TermRequest {
                count: MAX_TERMS,
                clamped_from: Some(requested),
            })
        }
    }
}

/// Parse and validate a maximum value answer.
///
/// # Errors
///
/// [`InputError::Negative`] if the answer is not a number or is negative.
pub fn parse_max_value(raw: &str) -> Result<i64, InputError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => {
            warn!(input = raw.trim(), "rejected maximum value");
            Err(InputError::Negative)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_numbers() {
        assert_eq!(Choice::parse("1"), Choice::Mode(Mode::ByCount));
        assert_eq!(Choice::parse(" 2\n"), Choice::Mode(Mode::ByMaximum));
        assert_eq!(Choice::parse("3"), Choice::Mode(Mode::WithStats));
        assert_eq!(Choice::parse("4"), Choice::Mode(Mode::InColumns));
    }

    #[test]
    fn choice_invalid() {
        assert_eq!(Choice::parse("0"), Choice::Invalid);
        assert_eq!(Choice::parse("5"), Choice::Invalid);
        assert_eq!(Choice::parse("-1"), Choice::Invalid);
        assert_eq!(Choice::parse("abc"), Choice::Invalid);
        assert_eq!(Choice::parse(""), Choice::Invalid);
    }

    #[test]
    fn mode_numbers_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Choice::from_number(i64::from(mode.number())), Choice::Mode(mode));
        }
    }

    #[test]
    fn term_count_valid() {
        let req = parse_term_count("10\n").unwrap();
        assert_eq!(req.count, 10);
        assert!(!req.is_clamped());
        assert_eq!(parse_term_count("92").unwrap().count, 92);
    }

    #[test]
    fn term_count_clamped() {
        let req = parse_term_count("93").unwrap();
        assert_eq!(req.count, MAX_TERMS);
        assert_eq!(req.clamped_from, Some(93));
        let largest = parse_term_count("9223372036854775807").unwrap();
        assert_eq!(largest.count, MAX_TERMS);
        assert_eq!(largest.clamped_from, Some(9_223_372_036_854_775_807));
    }

    #[test]
    fn term_count_beyond_i64_rejected() {
        assert_eq!(
            parse_term_count("9223372036854775808"),
            Err(InputError::NotPositive)
        );
        assert_eq!(
            parse_term_count("18446744073709551615"),
            Err(InputError::NotPositive)
        );
        assert_eq!(
            parse_term_count("-9223372036854775809"),
            Err(InputError::NotPositive)
        );
    }

    #[test]
    fn term_count_rejected() {
        assert_eq!(parse_term_count("0"), Err(InputError::NotPositive));
        assert_eq!(parse_term_count("-3"), Err(InputError::NotPositive));
        assert_eq!(parse_term_count("ten"), Err(InputError::NotPositive));
        assert_eq!(parse_term_count(""), Err(InputError::NotPositive));
        assert_eq!(
            parse_term_count("99999999999999999999999"),
            Err(InputError::NotPositive)
        );
    }

    #[test]
    fn max_value() {
        assert_eq!(parse_max_value("0"), Ok(0));
        assert_eq!(parse_max_value(" 100 \n"), Ok(100));
        assert_eq!(parse_max_value("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_max_value("-1"), Err(InputError::Negative));
        assert_eq!(parse_max_value("x"), Err(InputError::Negative));
    }

    #[test]
    fn only_maximum_mode_takes_a_value() {
        assert!(Mode::ByCount.takes_term_count());
        assert!(!Mode::ByMaximum.takes_term_count());
        assert!(Mode::WithStats.takes_term_count());
        assert!(Mode::InColumns.takes_term_count());
    }
}
