//! Plain-text formatting of terms and statistics.

use std::fmt::Write as _;

use fibseq_core::{Statistics, COLUMN_WIDTH, TERMS_PER_ROW};

/// Terms on one line, each followed by a single space.
#[must_use]
pub fn format_line(terms: &[i64]) -> String {
    let mut s = String::new();
    for term in terms {
        let _ = write!(s, "{term} ");
    }
    s
}

/// Terms right-aligned in fixed-width fields, with a line break after
/// every [`TERMS_PER_ROW`] terms.
#[must_use]
pub fn format_columns(terms: &[i64]) -> String {
    let mut s = String::new();
    for (i, term) in terms.iter().enumerate() {
        let _ = write!(s, "{term:>width$}", width = COLUMN_WIDTH);
        if (i + 1) % TERMS_PER_ROW == 0 {
            s.push('\n');
        }
    }
    s
}

/// Indented statistics lines (without the heading).
#[must_use]
pub fn format_statistics(stats: &Statistics) -> Vec<String> {
    let mut lines = vec![
        format!("  Number of terms: {}", stats.count),
        format!("  Sum of all terms: {}", stats.sum),
        format!("  Average value: {:.2}", stats.mean),
    ];
    if let (Some(last), Some(second_to_last)) = (stats.last, stats.second_to_last) {
        lines.push(format!("  Last term: {last}"));
        lines.push(format!("  Second-to-last term: {second_to_last}"));
        if let Some(ratio) = &stats.ratio {
            lines.push(format!("  Ratio (F(n)/F(n-1)): {:.10}", ratio.ratio));
            lines.push(format!("  Golden Ratio (\u{3c6}): {:.10}", ratio.golden_ratio));
            lines.push(format!("  Difference: {:.10}", ratio.difference));
        }
    }
    lines
}
