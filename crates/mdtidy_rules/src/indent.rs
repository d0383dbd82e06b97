//! Unordered-list indentation normalization.

use crate::line;
use crate::options::FixOptions;
use crate::region::RegionTracker;

/// Quantizes unordered-list indentation to a multiple of the configured
/// width. The nesting level comes from the existing indentation alone, not
/// from any semantic parent/child inference.
pub fn apply(lines: &[String], options: &FixOptions) -> Vec<String> {
    let width = options.list_indent.max(1);
    let mut fixed = Vec::with_capacity(lines.len());
    let mut region = RegionTracker::new();

    for current in lines {
        if region.observe(current).is_protected() || !line::is_unordered_item(current) {
            fixed.push(current.clone());
            continue;
        }

        let level = line::indent_width(current) / width;
        fixed.push(format!(
            "{}{}",
            " ".repeat(level * width),
            current.trim_start()
        ));
    }

    fixed
}
