//! Limits and layout constants for sequence generation.

/// Largest supported term count.
///
/// A run of 92 terms ends at F(91); F(92) = 7,540,113,804,746,346,429 is the
/// last Fibonacci number that fits in `i64`.
pub const MAX_TERMS: usize = 92;

/// Reference value printed next to the computed ratio.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_7;

/// Field width of a term in column mode.
pub const COLUMN_WIDTH: usize = 12;

/// Number of terms per row in column mode.
pub const TERMS_PER_ROW: usize = 10;
