//! File discovery for explicit paths and glob patterns.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSetBuilder};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::FixerError;

/// Keeps the explicit file paths that exist, warning about the rest.
pub fn resolve_files(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut resolved = Vec::with_capacity(files.len());
    for file in files {
        if file.is_file() {
            resolved.push(file.clone());
        } else {
            warn!("File not found: {}", file.display());
        }
    }
    resolved
}

/// Discovers files under `base_dir` matching the glob patterns. A pattern
/// naming an existing file is taken as-is without walking.
pub fn discover_files(patterns: &[String], base_dir: &Path) -> Result<Vec<PathBuf>, FixerError> {
    let mut files = Vec::new();

    let mut glob_builder = GlobSetBuilder::new();
    let mut has_globs = false;

    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            let glob = Glob::new(pattern)
                .map_err(|e| FixerError::config(format!("Invalid pattern '{}': {}", pattern, e)))?;
            glob_builder.add(glob);
            has_globs = true;
        }
    }

    if has_globs {
        let glob_set = glob_builder
            .build()
            .map_err(|e| FixerError::config(format!("Failed to build globset: {}", e)))?;

        for entry in WalkDir::new(base_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && glob_set.is_match(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();

    info!("Found {} markdown files to process", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn discovers_matching_files_recursively() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("docs");
        fs::create_dir(&nested).unwrap();
        fs::write(temp_dir.path().join("readme.md"), "# Readme").unwrap();
        fs::write(nested.join("guide.md"), "# Guide").unwrap();
        fs::write(nested.join("notes.txt"), "notes").unwrap();

        let files = discover_files(&["**/*.md".to_string()], temp_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("readme.md")));
        assert!(files.iter().any(|f| f.ends_with("guide.md")));
        assert!(!files.iter().any(|f| f.ends_with("notes.txt")));
    }

    #[test]
    fn literal_file_pattern_short_circuits() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("exact.md");
        fs::write(&file, "# Exact").unwrap();

        let files = discover_files(
            &[file.to_string_lossy().into_owned()],
            temp_dir.path(),
        )
        .unwrap();

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn deduplicates_overlapping_patterns() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("one.md"), "# One").unwrap();

        let files = discover_files(
            &["**/*.md".to_string(), "**/*.md".to_string()],
            temp_dir.path(),
        )
        .unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let result = discover_files(&["[invalid".to_string()], temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn resolve_files_drops_missing_paths() {
        let temp_dir = tempdir().unwrap();
        let present = temp_dir.path().join("here.md");
        fs::write(&present, "# Here").unwrap();
        let missing = temp_dir.path().join("gone.md");

        let resolved = resolve_files(&[present.clone(), missing]);
        assert_eq!(resolved, vec![present]);
    }
}
