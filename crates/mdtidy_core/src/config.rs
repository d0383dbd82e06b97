//! Markdownlint configuration loading.
//!
//! Reads the subset of `.markdownlint.json` the fixer cares about:
//! `MD013.line_length`, `MD003.style` and `MD007.indent`. Comments in the
//! file are tolerated. Anything missing, unreadable or malformed falls back
//! to the defaults and is logged as a warning, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde_json::Value;
use tracing::warn;

use mdtidy_rules::{FixOptions, HeadingStyle};

use crate::FixerError;

/// File names probed when no explicit config path is given.
pub const CONFIG_FILES: [&str; 2] = [".markdownlint.json", ".markdownlint.jsonc"];

/// Probes `base_dir` for a known config file name.
pub fn discover(base_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.join(name))
        .find(|path| path.is_file())
}

/// Loads fix options from a markdownlint config file, falling back to the
/// defaults when the file is missing or malformed.
pub fn load_options(path: &Path) -> FixOptions {
    if !path.exists() {
        warn!(
            "Markdownlint config not found at {}, using defaults",
            path.display()
        );
        return FixOptions::default();
    }

    match read_options(path) {
        Ok(options) => options,
        Err(e) => {
            warn!("Error loading markdownlint config: {}", e);
            FixOptions::default()
        }
    }
}

fn read_options(path: &Path) -> Result<FixOptions, FixerError> {
    let content = fs::read_to_string(path)
        .map_err(|e| FixerError::config(format!("Failed to read config: {}", e)))?;
    parse_options(&content)
}

/// Parses markdownlint JSON into fix options. Each setting falls back to its
/// default independently.
pub fn parse_options(json: &str) -> Result<FixOptions, FixerError> {
    let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
        .map_err(|e| FixerError::config(format!("Invalid config: {}", e)))?
        .unwrap_or(Value::Null);

    let defaults = FixOptions::default();
    let line_length = value
        .pointer("/MD013/line_length")
        .and_then(Value::as_u64)
        .map_or(defaults.line_length, |n| n as usize);
    let heading_style = value
        .pointer("/MD003/style")
        .and_then(Value::as_str)
        .map_or(defaults.heading_style, HeadingStyle::parse_lossy);
    let list_indent = value
        .pointer("/MD007/indent")
        .and_then(Value::as_u64)
        .map_or(defaults.list_indent, |n| n as usize);

    Ok(FixOptions {
        line_length,
        heading_style,
        list_indent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn parses_relevant_settings() {
        let json = r#"{
            "MD013": { "line_length": 100 },
            "MD003": { "style": "setext" },
            "MD007": { "indent": 4 }
        }"#;

        let options = parse_options(json).unwrap();
        assert_eq!(options.line_length, 100);
        assert_eq!(options.heading_style, HeadingStyle::Setext);
        assert_eq!(options.list_indent, 4);
    }

    #[test]
    fn missing_settings_fall_back_per_field() {
        let json = r#"{ "MD013": { "line_length": 80 } }"#;

        let options = parse_options(json).unwrap();
        assert_eq!(options.line_length, 80);
        assert_eq!(options.heading_style, HeadingStyle::Atx);
        assert_eq!(options.list_indent, 2);
    }

    #[test]
    fn boolean_rule_entries_are_ignored() {
        // markdownlint configs commonly enable rules with a plain boolean
        let json = r#"{ "MD013": true, "MD003": false }"#;

        let options = parse_options(json).unwrap();
        assert_eq!(options, FixOptions::default());
    }

    #[test]
    fn tolerates_comments() {
        let json = "{\n  // project line limit\n  \"MD013\": { \"line_length\": 90 }\n}";
        let options = parse_options(json).unwrap();
        assert_eq!(options.line_length, 90);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_options("{ not json").is_err());
    }

    use rstest::rstest;

    #[rstest]
    #[case(r#"{ "MD003": { "style": "atx" } }"#, HeadingStyle::Atx)]
    #[case(r#"{ "MD003": { "style": "setext" } }"#, HeadingStyle::Setext)]
    #[case(r#"{ "MD003": { "style": "atx_closed" } }"#, HeadingStyle::Atx)]
    fn heading_style_values(#[case] json: &str, #[case] expected: HeadingStyle) {
        assert_eq!(parse_options(json).unwrap().heading_style, expected);
    }

    #[test]
    fn load_options_missing_file_defaults() {
        let dir = tempdir().unwrap();
        let options = load_options(&dir.path().join(".markdownlint.json"));
        assert_eq!(options, FixOptions::default());
    }

    #[test]
    fn load_options_malformed_file_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".markdownlint.json");
        fs::write(&path, "{{{{").unwrap();
        assert_eq!(load_options(&path), FixOptions::default());
    }

    #[test]
    fn discover_prefers_json_over_jsonc() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".markdownlint.json"), "{}").unwrap();
        fs::write(dir.path().join(".markdownlint.jsonc"), "{}").unwrap();

        let found = discover(dir.path()).unwrap();
        assert!(found.ends_with(".markdownlint.json"));
    }

    #[test]
    fn discover_returns_none_when_absent() {
        let dir = tempdir().unwrap();
        assert!(discover(dir.path()).is_none());
    }
}
