//! Heading style conversion.

use crate::line;
use crate::options::{FixOptions, HeadingStyle};
use crate::region::RegionTracker;

/// Normalizes headings toward the configured style.
///
/// Setext can only express levels 1 and 2; deeper ATX headings stay in
/// (normalized) ATX form even when the target style is setext. That is a
/// documented limitation, not an error.
pub fn apply(lines: &[String], options: &FixOptions) -> Vec<String> {
    let mut fixed = Vec::with_capacity(lines.len());
    let mut region = RegionTracker::new();
    let mut i = 0;

    while i < lines.len() {
        let current = &lines[i];
        if region.observe(current).is_protected() {
            fixed.push(current.clone());
            i += 1;
            continue;
        }

        // Setext heading: a non-blank line with an `=`/`-` underline below.
        if !line::is_blank(current) {
            let underline = lines.get(i + 1).and_then(|next| line::setext_underline(next));
            if let Some(level) = underline {
                match options.heading_style {
                    HeadingStyle::Atx => {
                        fixed.push(format!("{} {}", "#".repeat(level), current.trim()));
                    }
                    HeadingStyle::Setext => {
                        fixed.push(current.clone());
                        fixed.push(lines[i + 1].clone());
                    }
                }
                i += 2;
                continue;
            }
        }

        match line::atx_heading(current) {
            Some(heading) => match options.heading_style {
                HeadingStyle::Setext if heading.level <= 2 => {
                    let underline = if heading.level == 1 { "=" } else { "-" };
                    fixed.push(heading.text.to_string());
                    fixed.push(underline.repeat(heading.text.chars().count()));
                }
                _ => {
                    fixed.push(format!("{} {}", "#".repeat(heading.level), heading.text));
                }
            },
            None => fixed.push(current.clone()),
        }
        i += 1;
    }

    fixed
}
