//! Property-based tests for the sequence engine.

use proptest::prelude::*;

use fibseq_core::input::{parse_max_value, parse_term_count};
use fibseq_core::iterator::FibIterator;
use fibseq_core::sequence::{generate, generate_up_to_max};
use fibseq_core::statistics::Statistics;
use fibseq_core::MAX_TERMS;

fn fib(n: usize) -> i128 {
    let (mut a, mut b) = (0i128, 1i128);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}

proptest! {
    /// F(0) + ... + F(n-1) == F(n+1) - 1.
    #[test]
    fn sum_identity(n in 1usize..=MAX_TERMS) {
        let seq = generate(n);
        prop_assert_eq!(seq.len(), n);
        prop_assert_eq!(seq.sum(), fib(n + 1) - 1);
    }

    /// Every term after the first two is the sum of the two before it.
    #[test]
    fn recurrence_holds(n in 3usize..=MAX_TERMS) {
        let seq = generate(n);
        for w in seq.terms().windows(3) {
            prop_assert_eq!(w[0] + w[1], w[2]);
        }
    }

    /// Bounded generation never exceeds the bound and is maximal.
    #[test]
    fn bounded_respects_max(max in 0i64..=i64::MAX) {
        let seq = generate_up_to_max(max);
        prop_assert!(!seq.is_empty());
        prop_assert!(seq.terms().iter().all(|&t| t <= max));
        let next = FibIterator::new().nth(seq.len()).map(|(_, v)| v);
        if let Some(next) = next {
            prop_assert!(next > max);
        }
    }

    /// Mean is the sum divided by the count.
    #[test]
    fn mean_is_sum_over_count(n in 1usize..=MAX_TERMS) {
        let seq = generate(n);
        let stats = Statistics::compute(&seq).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = seq.sum() as f64 / n as f64;
        prop_assert!((stats.mean - expected).abs() <= expected.abs() * 1e-12);
    }

    /// Any accepted term count lands in 1..=MAX_TERMS.
    #[test]
    fn term_count_always_in_range(raw in "\\PC*") {
        if let Ok(req) = parse_term_count(&raw) {
            prop_assert!((1..=MAX_TERMS).contains(&req.count));
        }
    }

    /// Accepted maximum values are never negative.
    #[test]
    fn max_value_never_negative(value in any::<i64>()) {
        let parsed = parse_max_value(&value.to_string());
        prop_assert_eq!(parsed.is_ok(), value >= 0);
    }
}
