//! Trailing-whitespace removal.

use crate::options::FixOptions;

/// Strips trailing whitespace from every line. This is the one transform
/// that also applies inside fenced code blocks.
pub fn apply(lines: &[String], _options: &FixOptions) -> Vec<String> {
    lines.iter().map(|line| line.trim_end().to_string()).collect()
}
