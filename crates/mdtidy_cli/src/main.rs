//! mdtidy CLI
//!
//! Fixes common markdownlint issues in Markdown files: line length, fence
//! language tags, list numbering and indentation, heading style, trailing
//! whitespace and blank-line placement.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mdtidy_core::{Fixer, config, file_finder};
use mdtidy_rules::{FixKind, FixOptions, FixSelection};

/// mdtidy - Markdown style fixer
#[derive(Parser)]
#[command(name = "mdtidy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Specific markdown files to process
    #[arg(short, long, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Directory to scan for markdown files
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,

    /// Glob patterns to match markdown files
    #[arg(short, long, num_args = 1.., default_value = "**/*.md")]
    pattern: Vec<String>,

    /// Path to markdownlint config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override maximum line length
    #[arg(long)]
    line_length: Option<usize>,

    /// Show what would be fixed without making changes
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Process files in parallel
    #[arg(long)]
    parallel: bool,

    /// Which fixes to apply
    #[arg(long = "fix", value_enum, num_args = 1.., default_value = "all")]
    fixes: Vec<FixArg>,
}

/// Command-line names for the fix subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FixArg {
    LineLength,
    CodeBlocks,
    Lists,
    Headings,
    Whitespace,
    BlankLines,
    All,
}

impl FixArg {
    fn kind(self) -> Option<FixKind> {
        match self {
            FixArg::LineLength => Some(FixKind::LineLength),
            FixArg::CodeBlocks => Some(FixKind::CodeBlocks),
            FixArg::Lists => Some(FixKind::Lists),
            FixArg::Headings => Some(FixKind::Headings),
            FixArg::Whitespace => Some(FixKind::Whitespace),
            FixArg::BlankLines => Some(FixKind::BlankLines),
            FixArg::All => None,
        }
    }
}

fn selection_from_args(fixes: &[FixArg]) -> FixSelection {
    if fixes.contains(&FixArg::All) {
        FixSelection::all()
    } else {
        FixSelection::from_kinds(fixes.iter().filter_map(|f| f.kind()))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = load_options(&cli);

    let files = if cli.files.is_empty() {
        if !cli.directory.is_dir() {
            return Err(miette!("Directory not found: {}", cli.directory.display()));
        }
        file_finder::discover_files(&cli.pattern, &cli.directory).into_diagnostic()?
    } else {
        file_finder::resolve_files(&cli.files)
    };

    if files.is_empty() {
        return Err(miette!("No files to process."));
    }

    let selection = selection_from_args(&cli.fixes);
    let fixer = Fixer::new(options, selection).dry_run(cli.dry_run);
    let summary = fixer.fix_files(&files, cli.parallel);

    if !summary.failures.is_empty() {
        eprintln!("\n{} file(s) failed:", summary.failures.len());
        for (path, error) in &summary.failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    if cli.dry_run {
        info!(
            "[DRY RUN] Would fix {} of {} files",
            summary.fixed_count(),
            summary.total()
        );
    } else {
        info!("Fixed {} of {} files", summary.fixed_count(), summary.total());
    }

    Ok(())
}

/// Config file settings, overridden by command-line flags.
fn load_options(cli: &Cli) -> FixOptions {
    let config_path = cli
        .config
        .clone()
        .or_else(|| config::discover(&cli.directory));

    let mut options = match config_path {
        Some(path) => config::load_options(&path),
        None => {
            info!("No markdownlint config found, using defaults");
            FixOptions::default()
        }
    };

    if let Some(line_length) = cli.line_length {
        options.line_length = line_length;
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_wins_over_subsets() {
        let selection = selection_from_args(&[FixArg::Lists, FixArg::All]);
        for kind in FixKind::ALL {
            assert!(selection.enables(kind));
        }
    }

    #[test]
    fn subset_selection_maps_kinds() {
        let selection = selection_from_args(&[FixArg::Whitespace, FixArg::Headings]);
        assert!(selection.enables(FixKind::Whitespace));
        assert!(selection.enables(FixKind::Headings));
        assert!(!selection.enables(FixKind::LineLength));
    }
}
