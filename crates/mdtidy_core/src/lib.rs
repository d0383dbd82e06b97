//! # mdtidy_core
//!
//! Fixer engine for mdtidy.
//!
//! This crate provides:
//! - Markdownlint configuration loading
//! - File discovery for explicit paths and glob patterns
//! - The per-file fix boundary and sequential/parallel dispatch
//!
//! ## Example
//!
//! ```rust,ignore
//! use mdtidy_core::{config, file_finder, Fixer};
//! use mdtidy_rules::FixSelection;
//!
//! let options = config::load_options(std::path::Path::new(".markdownlint.json"));
//! let files = file_finder::discover_files(&["**/*.md".to_string()], std::path::Path::new("."))?;
//!
//! let fixer = Fixer::new(options, FixSelection::all());
//! let summary = fixer.fix_files(&files, false);
//! println!("fixed {} of {} files", summary.fixed_count(), summary.total());
//! ```

pub mod config;
mod error;
pub mod file_finder;
mod fixer;

pub use error::FixerError;
pub use fixer::{FileReport, Fixer, RunSummary};
