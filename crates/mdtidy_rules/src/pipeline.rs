//! The fixed-order transform pipeline.

use tracing::debug;

use crate::options::{FixKind, FixOptions, FixSelection};
use crate::{blank, fence_lang, heading, indent, renumber, whitespace, wrap};

type PassFn = fn(&[String], &FixOptions) -> Vec<String>;

/// Pass order is fixed: blank-line placement must see final list and heading
/// shapes, and wrapping runs last so its continuation lines are never re-fed
/// to earlier passes.
const PASSES: [(FixKind, PassFn); 7] = [
    (FixKind::Whitespace, whitespace::apply),
    (FixKind::CodeBlocks, fence_lang::apply),
    (FixKind::Lists, renumber::apply),
    (FixKind::Lists, indent::apply),
    (FixKind::Headings, heading::apply),
    (FixKind::BlankLines, blank::apply),
    (FixKind::LineLength, wrap::apply),
];

/// Result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixResult {
    /// The corrected document content.
    pub content: String,
    /// Whether the content differs from the input.
    pub changed: bool,
}

/// Applies the selected transforms to a document, one full pass each, in
/// fixed order. State never crosses documents: every `apply` call starts
/// fresh.
#[derive(Debug, Clone)]
pub struct FixPipeline {
    options: FixOptions,
    selection: FixSelection,
}

impl FixPipeline {
    /// A pipeline applying every fix.
    pub fn new(options: FixOptions) -> Self {
        Self {
            options,
            selection: FixSelection::all(),
        }
    }

    /// A pipeline applying only the selected fixes.
    pub fn with_selection(options: FixOptions, selection: FixSelection) -> Self {
        Self { options, selection }
    }

    pub fn options(&self) -> &FixOptions {
        &self.options
    }

    /// Runs every enabled pass over `content` and reports whether anything
    /// changed.
    pub fn apply(&self, content: &str) -> FixResult {
        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

        for (kind, pass) in PASSES {
            if !self.selection.enables(kind) {
                continue;
            }
            debug!(fix = kind.name(), "running pass");
            lines = pass(&lines, &self.options);
        }

        let fixed = lines.join("\n");
        let changed = fixed != content;
        FixResult {
            content: fixed,
            changed,
        }
    }
}
