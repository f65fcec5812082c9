//! # fibseq-core
//!
//! Sequence engine for the fibseq generator: 64-bit Fibonacci terms,
//! bounded generation, summary statistics and validation of user input.

pub mod constants;
pub mod error;
pub mod input;
pub mod iterator;
pub mod report;
pub mod sequence;
pub mod statistics;

// Re-exports
pub use constants::{COLUMN_WIDTH, GOLDEN_RATIO, MAX_TERMS, TERMS_PER_ROW};
pub use error::InputError;
pub use input::{parse_max_value, parse_term_count, Choice, Mode, TermRequest};
pub use iterator::FibIterator;
pub use report::RunReport;
pub use sequence::{generate, generate_up_to_max, Sequence};
pub use statistics::{RatioStats, Statistics};
