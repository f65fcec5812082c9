//! Lazy Fibonacci iterator over `i64` using the additive recurrence.

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0) and stops after F(92),
/// the last term representable as `i64`.
///
/// # Example
/// ```
/// use fibseq_core::iterator::FibIterator;
/// let fibs: Vec<i64> = FibIterator::new().take(7).map(|(_, v)| v).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    prev: i64,
    // None once the next term would overflow.
    curr: Option<i64>,
    index: usize,
    done: bool,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prev: 0,
            curr: Some(1),
            index: 0,
            done: false,
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (usize, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let val = self.prev;
        let idx = self.index;
        match self.curr {
            Some(curr) => {
                self.curr = self.prev.checked_add(curr);
                self.prev = curr;
            }
            None => self.done = true,
        }
        self.index += 1;
        Some((idx, val))
    }
}

impl std::iter::FusedIterator for FibIterator {}
