//! Fix options and the named fix subset.

use serde::{Deserialize, Serialize};

/// Heading representation to normalize toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    /// `# Heading` form, levels 1-6.
    #[default]
    Atx,
    /// Underlined form, levels 1-2 only.
    Setext,
}

impl HeadingStyle {
    /// Parses a markdownlint `MD003.style` value. Unknown styles fall back
    /// to ATX.
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "setext" => Self::Setext,
            _ => Self::Atx,
        }
    }
}

/// Options consumed by the transform pipeline.
///
/// Loaded by the configuration layer and passed by value; the transforms
/// never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixOptions {
    /// Maximum line length in characters.
    pub line_length: usize,
    /// Target heading representation.
    pub heading_style: HeadingStyle,
    /// Spaces per unordered-list nesting level.
    pub list_indent: usize,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            line_length: 120,
            heading_style: HeadingStyle::Atx,
            list_indent: 2,
        }
    }
}

/// A named group of fixes selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixKind {
    Whitespace,
    CodeBlocks,
    Lists,
    Headings,
    BlankLines,
    LineLength,
}

impl FixKind {
    /// Every fix kind, in pipeline order.
    pub const ALL: [FixKind; 6] = [
        FixKind::Whitespace,
        FixKind::CodeBlocks,
        FixKind::Lists,
        FixKind::Headings,
        FixKind::BlankLines,
        FixKind::LineLength,
    ];

    /// The command-line name of this fix.
    pub fn name(self) -> &'static str {
        match self {
            FixKind::Whitespace => "whitespace",
            FixKind::CodeBlocks => "code-blocks",
            FixKind::Lists => "lists",
            FixKind::Headings => "headings",
            FixKind::BlankLines => "blank-lines",
            FixKind::LineLength => "line-length",
        }
    }
}

/// The set of fixes a pipeline run applies.
#[derive(Debug, Clone)]
pub struct FixSelection {
    kinds: Vec<FixKind>,
}

impl FixSelection {
    /// Selects every fix.
    pub fn all() -> Self {
        Self {
            kinds: FixKind::ALL.to_vec(),
        }
    }

    /// Selects only the given kinds, deduplicated, order-insensitive.
    pub fn from_kinds(kinds: impl IntoIterator<Item = FixKind>) -> Self {
        let mut selected = Vec::new();
        for kind in kinds {
            if !selected.contains(&kind) {
                selected.push(kind);
            }
        }
        Self { kinds: selected }
    }

    /// Whether the given fix is enabled.
    pub fn enables(&self, kind: FixKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// True when no fix is enabled.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for FixSelection {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_markdownlint_defaults() {
        let options = FixOptions::default();
        assert_eq!(options.line_length, 120);
        assert_eq!(options.heading_style, HeadingStyle::Atx);
        assert_eq!(options.list_indent, 2);
    }

    #[test]
    fn heading_style_parse_lossy() {
        assert_eq!(HeadingStyle::parse_lossy("setext"), HeadingStyle::Setext);
        assert_eq!(HeadingStyle::parse_lossy("atx"), HeadingStyle::Atx);
        assert_eq!(HeadingStyle::parse_lossy("atx_closed"), HeadingStyle::Atx);
    }

    #[test]
    fn selection_all_enables_everything() {
        let selection = FixSelection::all();
        for kind in FixKind::ALL {
            assert!(selection.enables(kind));
        }
    }

    #[test]
    fn selection_subset() {
        let selection = FixSelection::from_kinds([FixKind::Lists, FixKind::Lists]);
        assert!(selection.enables(FixKind::Lists));
        assert!(!selection.enables(FixKind::Headings));
    }
}
