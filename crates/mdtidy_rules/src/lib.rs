//! # mdtidy_rules
//!
//! Line-scanning Markdown style transforms.
//!
//! This crate provides:
//! - Per-line classification predicates (`line`)
//! - Code-block region tracking (`region`)
//! - The seven style transforms, one module each
//! - The `FixPipeline` that chains them in fixed order
//!
//! Every transform is a total function over arbitrary text: malformed input
//! degrades to pass-through, never to an error.
//!
//! ## Example
//!
//! ```rust
//! use mdtidy_rules::{FixOptions, FixPipeline};
//!
//! let pipeline = FixPipeline::new(FixOptions::default());
//! let result = pipeline.apply("1. a\n3. b\n5. c\n");
//! assert!(result.changed);
//! assert_eq!(result.content, "1. a\n2. b\n3. c\n");
//! ```

pub mod blank;
pub mod fence_lang;
pub mod heading;
pub mod indent;
pub mod line;
mod options;
mod pipeline;
pub mod region;
pub mod renumber;
pub mod whitespace;
pub mod wrap;

pub use options::{FixKind, FixOptions, FixSelection, HeadingStyle};
pub use pipeline::{FixPipeline, FixResult};
