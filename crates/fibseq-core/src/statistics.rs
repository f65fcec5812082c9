//! Summary statistics over a generated sequence.

use serde::Serialize;

use crate::constants::GOLDEN_RATIO;
use crate::sequence::Sequence;

/// Ratio of the last two terms compared against the golden ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioStats {
    /// F(n) / F(n-1).
    pub ratio: f64,
    /// Reference constant.
    pub golden_ratio: f64,
    /// |ratio - golden_ratio|.
    pub difference: f64,
}

/// Statistics for a non-empty sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub sum: i128,
    pub mean: f64,
    /// Last term, present when at least two terms exist.
    pub last: Option<i64>,
    /// Second-to-last term, present when at least two terms exist.
    pub second_to_last: Option<i64>,
    /// Present when the second-to-last term is non-zero.
    pub ratio: Option<RatioStats>,
}

impl Statistics {
    /// Compute statistics for `seq`, or `None` if it is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(seq: &Sequence) -> Option<Self> {
        if seq.is_empty() {
            return None;
        }
        let count = seq.len();
        let mean = seq.sum() as f64 / count as f64;
        let last_two = seq.last_two();
        let ratio = last_two.and_then(|(second_to_last, last)| {
            (second_to_last != 0).then(|| {
                let ratio = last as f64 / second_to_last as f64;
                RatioStats {
                    ratio,
                    golden_ratio: GOLDEN_RATIO,
                    difference: (ratio - GOLDEN_RATIO).abs(),
                }
            })
        });

        Some(Self {
            count,
            sum: seq.sum(),
            mean,
            last: last_two.map(|(_, last)| last),
            second_to_last: last_two.map(|(second_to_last, _)| second_to_last),
            ratio,
        })
    }
}
