//! Per-file fix boundary and sequential/parallel dispatch.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use mdtidy_rules::{FixOptions, FixPipeline, FixSelection};

use crate::FixerError;

/// Outcome of fixing a single file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// Whether the pipeline changed the content.
    pub changed: bool,
    /// Whether the change was written back (always false under dry-run).
    pub written: bool,
}

/// Aggregate outcome of a run over many files.
#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
    pub failures: Vec<(PathBuf, FixerError)>,
}

impl RunSummary {
    /// Number of files the pipeline changed (or would change under dry-run).
    pub fn fixed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.changed).count()
    }

    /// Total number of files attempted, failures included.
    pub fn total(&self) -> usize {
        self.reports.len() + self.failures.len()
    }
}

/// Applies the transform pipeline to files, in place or as a dry-run.
///
/// The fixer holds only read-only state, so one instance can serve every
/// worker in a parallel run.
pub struct Fixer {
    pipeline: FixPipeline,
    dry_run: bool,
}

impl Fixer {
    pub fn new(options: FixOptions, selection: FixSelection) -> Self {
        Self {
            pipeline: FixPipeline::with_selection(options, selection),
            dry_run: false,
        }
    }

    /// Switches the fixer to report-only mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fixes one file. The error covers unreadable and unwritable targets;
    /// the transforms themselves cannot fail.
    pub fn fix_file(&self, path: &Path) -> Result<FileReport, FixerError> {
        info!("Processing {}...", path.display());

        let original = fs::read_to_string(path)
            .map_err(|e| FixerError::file(format!("Failed to read {}: {}", path.display(), e)))?;

        let result = self.pipeline.apply(&original);

        if !result.changed {
            info!("No changes needed for {}", path.display());
            return Ok(FileReport {
                path: path.to_path_buf(),
                changed: false,
                written: false,
            });
        }

        if self.dry_run {
            info!("[DRY RUN] Would fix {}", path.display());
            return Ok(FileReport {
                path: path.to_path_buf(),
                changed: true,
                written: false,
            });
        }

        fs::write(path, &result.content)
            .map_err(|e| FixerError::file(format!("Failed to write {}: {}", path.display(), e)))?;
        info!("Fixed {}", path.display());

        Ok(FileReport {
            path: path.to_path_buf(),
            changed: true,
            written: true,
        })
    }

    /// Fixes every file, optionally across a rayon worker pool. Each file is
    /// an isolated failure domain: errors are collected, never propagated,
    /// and the remaining files still run.
    pub fn fix_files(&self, paths: &[PathBuf], parallel: bool) -> RunSummary {
        let results: Vec<Result<FileReport, (PathBuf, FixerError)>> = if parallel {
            paths
                .par_iter()
                .map(|path| self.fix_file(path).map_err(|e| (path.clone(), e)))
                .collect()
        } else {
            paths
                .iter()
                .map(|path| self.fix_file(path).map_err(|e| (path.clone(), e)))
                .collect()
        };

        let mut reports = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(report) => reports.push(report),
                Err((path, error)) => {
                    warn!("Failed to fix {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        RunSummary { reports, failures }
    }
}
