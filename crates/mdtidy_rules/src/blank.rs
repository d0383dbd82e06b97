//! Blank-line placement around block elements.

use crate::line;
use crate::options::FixOptions;
use crate::region::{Region, RegionTracker};

/// Enforces one blank line around fences and headings and before the first
/// item of a list run, then collapses blank runs outside fenced regions.
///
/// This pass must run after list and heading restructuring so its lookahead
/// and lookbehind see final shapes.
pub fn apply(lines: &[String], _options: &FixOptions) -> Vec<String> {
    let mut fixed: Vec<String> = Vec::with_capacity(lines.len());
    let mut region = RegionTracker::new();

    for (i, current) in lines.iter().enumerate() {
        match region.observe(current) {
            Region::Open => {
                if i > 0 && fixed.last().is_some_and(|prev| !line::is_blank(prev)) {
                    fixed.push(String::new());
                }
                fixed.push(current.clone());
            }
            Region::Close => {
                fixed.push(current.clone());
                // A following heading inserts its own separator.
                if let Some(next) = lines.get(i + 1) {
                    if !line::is_blank(next) && line::atx_heading(next).is_none() {
                        fixed.push(String::new());
                    }
                }
            }
            Region::Code => fixed.push(current.clone()),
            Region::Text => {
                if line::atx_heading(current).is_some() {
                    if i > 0 && fixed.last().is_some_and(|prev| !line::is_blank(prev)) {
                        fixed.push(String::new());
                    }
                    fixed.push(current.clone());
                    if lines.get(i + 1).is_some_and(|next| !line::is_blank(next)) {
                        fixed.push(String::new());
                    }
                } else if line::is_list_item(current) {
                    let needs_separator = fixed
                        .last()
                        .is_some_and(|prev| !line::is_blank(prev) && !line::is_list_item(prev));
                    if needs_separator {
                        fixed.push(String::new());
                    }
                    fixed.push(current.clone());
                } else {
                    fixed.push(current.clone());
                }
            }
        }
    }

    collapse_blank_runs(&fixed)
}

/// Collapses runs of two or more blank lines into one. Fenced content is
/// left untouched.
fn collapse_blank_runs(lines: &[String]) -> Vec<String> {
    let mut collapsed = Vec::with_capacity(lines.len());
    let mut region = RegionTracker::new();
    let mut previous_blank = false;

    for current in lines {
        if region.observe(current).is_protected() {
            collapsed.push(current.clone());
            previous_blank = false;
            continue;
        }

        if line::is_blank(current) {
            if !previous_blank {
                collapsed.push(current.clone());
            }
            previous_blank = true;
        } else {
            collapsed.push(current.clone());
            previous_blank = false;
        }
    }

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> String {
        let lines: Vec<String> = input.split('\n').map(str::to_string).collect();
        apply(&lines, &FixOptions::default()).join("\n")
    }

    #[test]
    fn heading_gets_blanks_on_both_sides() {
        assert_eq!(run("text\n# Title\nbody"), "text\n\n# Title\n\nbody");
    }

    #[test]
    fn heading_at_document_start_gets_no_leading_blank() {
        assert_eq!(run("# Title\nbody"), "# Title\n\nbody");
    }

    #[test]
    fn fence_gets_blanks_on_both_sides() {
        assert_eq!(run("text\n```\ncode\n```\nafter"), "text\n\n```\ncode\n```\n\nafter");
    }

    #[test]
    fn fence_before_heading_defers_to_heading_separator() {
        assert_eq!(run("```\ncode\n```\n# Title"), "```\ncode\n```\n\n# Title");
    }

    #[test]
    fn list_run_gets_leading_blank_only() {
        assert_eq!(run("intro\n- one\n- two"), "intro\n\n- one\n- two");
    }

    #[test]
    fn ordered_items_count_as_list_items() {
        assert_eq!(run("intro\n1. one\n2. two"), "intro\n\n1. one\n2. two");
    }

    #[test]
    fn collapses_blank_runs() {
        assert_eq!(run("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn preserves_blank_runs_inside_fences() {
        let input = "```\na\n\n\nb\n```";
        assert_eq!(run(input), input);
    }

    #[test]
    fn already_separated_content_is_stable() {
        let input = "# Title\n\nbody\n\n- one\n- two";
        assert_eq!(run(input), input);
    }
}
