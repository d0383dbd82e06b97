//! Stateless per-line predicates shared by every transform.

/// Returns the leading whitespace prefix of `line`.
pub fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start().len();
    &line[..end]
}

/// Indentation width of `line`, counted in characters.
pub fn indent_width(line: &str) -> usize {
    leading_whitespace(line).chars().count()
}

/// True when the line is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Any fence delimiter: opening or closing, indented or language-tagged.
pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// A fence with no language token: three backticks at column zero followed
/// by nothing but whitespace.
pub fn is_bare_fence(line: &str) -> bool {
    line.strip_prefix("```")
        .is_some_and(|rest| rest.trim().is_empty())
}

/// An ordered-list item: `<indent><digits>. <text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedItem<'a> {
    /// The exact leading-whitespace string, used as the renumbering key.
    pub indent: &'a str,
    /// The number as written in the source.
    pub number: u64,
    /// Everything after the single whitespace following the dot.
    pub text: &'a str,
}

/// Parses an ordered-list item. Exactly one whitespace character must follow
/// the dot; any further spacing stays part of the text.
pub fn ordered_item(line: &str) -> Option<OrderedItem<'_>> {
    let indent = leading_whitespace(line);
    let rest = &line[indent.len()..];
    let digits_end = rest.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let after_dot = rest[digits_end..].strip_prefix('.')?;
    let first = after_dot.chars().next()?;
    if !first.is_whitespace() {
        return None;
    }
    let number = rest[..digits_end].parse().ok()?;
    Some(OrderedItem {
        indent,
        number,
        text: &after_dot[first.len_utf8()..],
    })
}

/// True for `-`, `*` or `+` followed by whitespace, at any indentation.
pub fn is_unordered_item(line: &str) -> bool {
    let rest = line.trim_start();
    let mut chars = rest.chars();
    matches!(chars.next(), Some('-' | '*' | '+')) && chars.next().is_some_and(char::is_whitespace)
}

/// True for any list item, ordered or unordered.
pub fn is_list_item(line: &str) -> bool {
    is_unordered_item(line) || ordered_item(line).is_some()
}

/// An ATX heading with its decoration stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtxHeading<'a> {
    /// Level 1-6 from the leading `#` run.
    pub level: usize,
    /// Trimmed heading text, trailing `#` decoration removed.
    pub text: &'a str,
}

/// Parses `#{1,6} text [###]` at column zero. A trailing `#` run counts as
/// decoration only when separated from the text by whitespace.
pub fn atx_heading(line: &str) -> Option<AtxHeading<'_>> {
    let rest = line.trim_start_matches('#');
    let level = line.len() - rest.len();
    if level == 0 || level > 6 {
        return None;
    }
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let body = rest.trim();
    if body.is_empty() {
        return None;
    }
    let stripped = body.trim_end_matches('#');
    let text = if stripped.len() < body.len() && stripped.ends_with(|c: char| c.is_whitespace()) {
        stripped.trim_end()
    } else {
        body
    };
    Some(AtxHeading { level, text })
}

/// A setext underline: all `=` (level 1) or all `-` (level 2) once trimmed.
pub fn setext_underline(line: &str) -> Option<usize> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.chars().all(|c| c == '=') {
        Some(1)
    } else if trimmed.chars().all(|c| c == '-') {
        Some(2)
    } else {
        None
    }
}
