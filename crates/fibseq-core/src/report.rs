//! Serializable summary of a single run.

use serde::Serialize;

use crate::input::{Mode, TermRequest};
use crate::sequence::{generate, generate_up_to_max, Sequence};
use crate::statistics::Statistics;

/// Outcome of one generation, suitable for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    /// Term count or maximum value that was used.
    pub value: i64,
    /// Original term count when it was clamped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clamped_from: Option<u64>,
    #[serde(flatten)]
    pub sequence: Sequence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

impl RunReport {
    /// Build the report for a term-count mode.
    #[must_use]
    pub fn for_count(mode: Mode, request: TermRequest) -> Self {
        let sequence = generate(request.count);
        let statistics = match mode {
            Mode::WithStats => Statistics::compute(&sequence),
            _ => None,
        };
        Self {
            mode,
            value: i64::try_from(request.count).unwrap_or(i64::MAX),
            clamped_from: request.clamped_from,
            sequence,
            statistics,
        }
    }

    /// Build the report for the by-maximum mode.
    #[must_use]
    pub fn for_max(max_value: i64) -> Self {
        Self {
            mode: Mode::ByMaximum,
            value: max_value,
            clamped_from: None,
            sequence: generate_up_to_max(max_value),
            statistics: None,
        }
    }
}
