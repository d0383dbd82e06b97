//! Ordered-list renumbering.

use std::collections::HashMap;

use crate::line;
use crate::options::FixOptions;
use crate::region::RegionTracker;

/// Recomputes ordered-list ordinals per indentation level.
///
/// Counters are keyed by the exact leading-whitespace string. Within one
/// contiguous run at a given indentation, ordinals are assigned 1, 2, 3, ...
/// regardless of the source numbers. A blank line ends every list whose
/// indentation is at least as deep as the next non-blank line.
pub fn apply(lines: &[String], _options: &FixOptions) -> Vec<String> {
    let mut fixed = Vec::with_capacity(lines.len());
    let mut region = RegionTracker::new();
    let mut counters: HashMap<String, usize> = HashMap::new();

    for (i, current) in lines.iter().enumerate() {
        if region.observe(current).is_protected() {
            fixed.push(current.clone());
            continue;
        }

        if let Some(item) = line::ordered_item(current) {
            // A run starts fresh unless the line directly continues an
            // ordered item; an item at a different indentation does not
            // interrupt the run, so a parent list resumes after its children.
            let starts_new_run = i == 0
                || line::is_blank(&lines[i - 1])
                || line::ordered_item(&lines[i - 1]).is_none();
            if starts_new_run {
                counters.insert(item.indent.to_string(), 1);
            }

            let number = counters.get(item.indent).copied().unwrap_or(1);
            counters.insert(item.indent.to_string(), number + 1);

            if item.number == number as u64 {
                fixed.push(current.clone());
            } else {
                fixed.push(format!("{}{}. {}", item.indent, number, item.text));
            }
            continue;
        }

        fixed.push(current.clone());

        if line::is_blank(current) {
            let next_indent = lines[i + 1..]
                .iter()
                .find(|l| !line::is_blank(l))
                .map_or(0, |l| line::indent_width(l));
            counters.retain(|indent, _| indent.chars().count() < next_indent);
        }
    }

    fixed
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
    fn renumbers_skipped_ordinals() {
        assert_eq!(run("1. a\n3. b\n5. c"), "1. a\n2. b\n3. c");
    }

    #[test]
    fn restarts_after_blank_separated_lists() {
        assert_eq!(run("1. a\n2. b\n\ntext\n\n7. c\n9. d"), "1. a\n2. b\n\ntext\n\n1. c\n2. d");
    }

    #[test]
    fn nested_levels_track_independently() {
        let input = "1. a\n3. b\n\n  1. x\n  5. y\n\n2. c";
        let expected = "1. a\n2. b\n\n  1. x\n  2. y\n\n1. c";
        assert_eq!(run(input), expected);
    }

    #[test]
    fn parent_resumes_after_nested_items() {
        let input = "1. a\n1. b\n  1. x\n  1. y\n1. c";
        let expected = "1. a\n2. b\n  1. x\n  2. y\n3. c";
        assert_eq!(run(input), expected);
    }

    #[test]
    fn paragraph_interrupts_a_run() {
        assert_eq!(run("1. a\nnote\n4. b"), "1. a\nnote\n1. b");
    }

    #[test]
    fn unordered_siblings_do_not_touch_counters() {
        assert_eq!(run("- x\n1. a\n- y"), "- x\n1. a\n- y");
    }

    #[test]
    fn code_blocks_are_skipped() {
        let input = "```\n1. a\n5. b\n```";
        assert_eq!(run(input), input);
    }

    #[test]
    fn blank_at_end_of_document_clears_state() {
        assert_eq!(run("1. a\n2. b\n"), "1. a\n2. b\n");
    }
}
