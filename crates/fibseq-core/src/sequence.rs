//! Sequence generation by term count and by maximum value.

use serde::Serialize;
use tracing::debug;

use crate::constants::MAX_TERMS;
use crate::iterator::FibIterator;

/// A generated run of Fibonacci terms, starting at F(0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    terms: Vec<i64>,
    // i128 because the sum of 92 terms, F(93) - 1, exceeds i64::MAX.
    sum: i128,
}

impl Sequence {
    fn from_terms(terms: Vec<i64>) -> Self {
        let sum = terms.iter().map(|&t| i128::from(t)).sum();
        Self { terms, sum }
    }

    /// The emitted terms in order.
    #[must_use]
    pub fn terms(&self) -> &[i64] {
        &self.terms
    }

    /// Number of emitted terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of all emitted terms.
    #[must_use]
    pub fn sum(&self) -> i128 {
        self.sum
    }

    /// Last term and the one before it, if at least two terms were emitted.
    #[must_use]
    pub fn last_two(&self) -> Option<(i64, i64)> {
        match self.terms.as_slice() {
            [.., second_to_last, last] => Some((*second_to_last, *last)),
            _ => None,
        }
    }
}

/// Generate the first `term_count` terms, F(0) through F(term_count - 1).
///
/// Counts above [`MAX_TERMS`] are clamped; callers are expected to have
/// validated the count already.
#[must_use]
pub fn generate(term_count: usize) -> Sequence {
    let count = term_count.min(MAX_TERMS);
    let terms: Vec<i64> = FibIterator::new().take(count).map(|(_, v)| v).collect();
    let seq = Sequence::from_terms(terms);
    debug!(term_count = count, sum = %seq.sum, "generated sequence by count");
    seq
}

/// Generate every term `t` with `t <= max_value`, in order.
///
/// Returns an empty sequence for a negative bound. Generation stops at the
/// last term representable as `i64`, so `i64::MAX` is a valid bound.
#[must_use]
pub fn generate_up_to_max(max_value: i64) -> Sequence {
    let terms: Vec<i64> = FibIterator::new()
        .map(|(_, v)| v)
        .take_while(|&v| v <= max_value)
        .collect();
    let seq = Sequence::from_terms(terms);
    debug!(max_value, count = seq.len(), "generated sequence up to maximum");
    seq
}
