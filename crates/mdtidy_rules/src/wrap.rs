//! Long-line wrapping.

use crate::line;
use crate::options::FixOptions;
use crate::region::RegionTracker;

/// Breakpoint candidates, searched for the rightmost occurrence inside the
/// limit. A pattern ending in a space breaks just before that space so the
/// delimiter stays on the first line.
const BREAKPOINTS: [&str; 8] = [". ", ", ", ": ", "; ", " - ", " and ", " or ", " but "];

/// Byte index of the `n`th character, saturating at the end of the string.
fn char_boundary(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Rightmost breakpoint whose pattern lies fully inside the first `limit`
/// characters, as a byte index into `s`.
fn best_breakpoint(s: &str, limit: usize) -> Option<usize> {
    let window = &s[..char_boundary(s, limit)];
    let mut best: Option<usize> = None;

    for pattern in BREAKPOINTS {
        if let Some(pos) = window.rfind(pattern) {
            let split = if pattern.ends_with(' ') {
                pos + pattern.len() - 1
            } else {
                pos + pattern.len()
            };
            if best.is_none_or(|b| split > b) {
                best = Some(split);
            }
        }
    }

    best
}

/// Last word boundary that fits within `limit` characters, as a character
/// offset into the single-space-joined word sequence. None when the first
/// word alone overflows or nothing overflows at all.
fn word_boundary(s: &str, limit: usize) -> Option<usize> {
    let mut current_len = 0usize;
    for (i, word) in s.split_whitespace().enumerate() {
        if current_len + char_len(word) + 1 > limit {
            return (i > 0).then_some(current_len);
        }
        current_len += char_len(word) + 1;
    }
    None
}

/// Start of the first inline `[text](http...)` link, if any.
fn find_link(s: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = s[from..].find('[') {
        let open = from + offset;
        if let Some(close_offset) = s[open + 1..].find(']') {
            if close_offset > 0 {
                let tail = &s[open + 1 + close_offset + 1..];
                if tail.starts_with("(http") && tail.find(')').is_some_and(|p| p >= 6) {
                    return Some(open);
                }
            }
        }
        from = open + 1;
    }
    None
}

/// One split for a `- ` / `* ` list item: the marker and indentation become
/// the continuation prefix, widened by the marker width.
fn wrap_list_item(current: &str, limit: usize, fixed: &mut Vec<String>) {
    let indent = line::leading_whitespace(current);
    let indent_chars = char_len(indent);
    let marker_end = indent.len() + 2;
    let prefix = &current[..marker_end];
    let rest = &current[marker_end..];
    let budget = limit.saturating_sub(indent_chars + 2);

    let split = best_breakpoint(rest, budget)
        .or_else(|| word_boundary(rest, budget).map(|n| char_boundary(rest, n)));

    match split {
        Some(at) if at > 0 => {
            fixed.push(format!("{}{}", prefix, rest[..at].trim_end()));
            let remaining = rest[at..].trim_start();
            if !remaining.is_empty() {
                fixed.push(format!("{}{}", " ".repeat(indent_chars + 2), remaining));
            }
        }
        _ => fixed.push(current.to_string()),
    }
}

/// Wraps a paragraph line: break before an inline link when one starts
/// inside the limit, otherwise at the best breakpoint, otherwise greedily at
/// word boundaries. A single unbreakable token is left unchanged.
fn wrap_paragraph(current: &str, limit: usize, fixed: &mut Vec<String>) {
    let has_link = current.contains("](http");

    if has_link {
        if let Some(start) = find_link(current) {
            if char_len(&current[..start]) < limit {
                let before = current[..start].trim_end();
                if before.is_empty() {
                    fixed.push(current.to_string());
                } else {
                    fixed.push(before.to_string());
                    fixed.push(current[start..].to_string());
                }
                return;
            }
        }
    }

    if let Some(at) = best_breakpoint(current, limit) {
        fixed.push(current[..at].trim_end().to_string());
        let remaining = current[at..].trim_start();
        if !remaining.is_empty() {
            let indent = char_len(line::leading_whitespace(current));
            fixed.push(format!("{}{}", " ".repeat(indent), remaining));
        }
        return;
    }

    if has_link {
        fixed.push(current.to_string());
        return;
    }

    greedy_wrap(current, limit, fixed);
}

/// Greedy word wrap for paragraph lines with no usable breakpoint; every
/// continuation line carries the original indentation.
fn greedy_wrap(current: &str, limit: usize, fixed: &mut Vec<String>) {
    let words: Vec<&str> = current.split_whitespace().collect();
    if words.len() <= 1 {
        fixed.push(current.to_string());
        return;
    }

    let indent = " ".repeat(char_len(line::leading_whitespace(current)));
    let mut pending = indent.clone();
    let mut pending_len = 0usize;

    for word in words {
        if pending_len + char_len(word) + 1 > limit {
            fixed.push(pending.trim_end().to_string());
            pending = format!("{indent}{word} ");
            pending_len = char_len(&pending);
        } else {
            pending.push_str(word);
            pending.push(' ');
            pending_len += char_len(word) + 1;
        }
    }

    if !pending.trim().is_empty() {
        fixed.push(pending.trim_end().to_string());
    }
}

/// Splits over-length lines at the best available breakpoint. Code blocks
/// and headings are exempt; continuation lines are never re-wrapped.
pub fn apply(lines: &[String], options: &FixOptions) -> Vec<String> {
    let limit = options.line_length;
    let mut fixed = Vec::with_capacity(lines.len());
    let mut region = RegionTracker::new();

    for current in lines {
        if region.observe(current).is_protected() {
            fixed.push(current.clone());
            continue;
        }

        let trimmed = current.trim_start();
        if trimmed.starts_with('#') || char_len(current) <= limit {
            fixed.push(current.clone());
            continue;
        }

        if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
            wrap_list_item(current, limit, &mut fixed);
        } else {
            wrap_paragraph(current, limit, &mut fixed);
        }
    }

    fixed
}
