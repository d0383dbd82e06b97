//! Language inference for bare code fences.
//!
//! A best-effort heuristic classifier, not a parser: false positives are
//! acceptable, determinism is the only hard requirement.

use crate::line;
use crate::options::FixOptions;
use crate::region::{Region, RegionTracker};

/// Fallback tag when no heuristic matches or the fence ends the document.
const DEFAULT_LANGUAGE: &str = "bash";

const SHELL_PREFIXES: [&str; 10] = [
    "docker ",
    "docker-compose",
    "npm ",
    "node ",
    "git ",
    "cd ",
    "make ",
    "sudo ",
    "curl ",
    "wget ",
];

fn looks_like_shell(s: &str) -> bool {
    SHELL_PREFIXES.iter().any(|prefix| s.starts_with(prefix))
}

fn looks_like_yaml(s: &str) -> bool {
    s.contains("version:") || s.contains("services:")
}

fn looks_like_json(s: &str) -> bool {
    s.starts_with('{') || s.starts_with('[')
}

fn looks_like_html(s: &str) -> bool {
    s.starts_with('<') && s.contains('>')
}

fn looks_like_python(s: &str) -> bool {
    s.contains("def ") || s.contains("import ") || s.starts_with("class ")
}

fn looks_like_javascript(s: &str) -> bool {
    s.contains("function ") || s.contains("const ") || s.contains("var ") || s.contains("let ")
}

fn looks_like_sql(s: &str) -> bool {
    let upper = s.to_uppercase();
    upper.contains("SELECT ") || upper.contains("CREATE TABLE")
}

fn bash_shebang(s: &str) -> bool {
    s.contains("#!/bin/bash") || s.contains("#!/usr/bin/env bash")
}

fn python_shebang(s: &str) -> bool {
    s.contains("#!/usr/bin/env python")
}

fn looks_like_c(s: &str) -> bool {
    s.contains("#include ") || s.contains("int main")
}

/// Ordered heuristic table; the first matching predicate supplies the tag.
const LANGUAGE_RULES: [(fn(&str) -> bool, &str); 10] = [
    (looks_like_shell, "bash"),
    (looks_like_yaml, "yaml"),
    (looks_like_json, "json"),
    (looks_like_html, "html"),
    (looks_like_python, "python"),
    (looks_like_javascript, "javascript"),
    (looks_like_sql, "sql"),
    (bash_shebang, "bash"),
    (python_shebang, "python"),
    (looks_like_c, "c"),
];

/// Picks a language tag for the first content line of a fence.
pub fn infer_language(first_line: &str) -> &'static str {
    let trimmed = first_line.trim();
    LANGUAGE_RULES
        .iter()
        .find(|(predicate, _)| predicate(trimmed))
        .map(|(_, tag)| *tag)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Tags bare opening fences with an inferred language. Closing fences and
/// fences that already carry a tag are left alone.
pub fn apply(lines: &[String], _options: &FixOptions) -> Vec<String> {
    let mut fixed = Vec::with_capacity(lines.len());
    let mut region = RegionTracker::new();

    for (i, current) in lines.iter().enumerate() {
        match region.observe(current) {
            Region::Open if line::is_bare_fence(current) => {
                let tag = lines
                    .get(i + 1)
                    .map_or(DEFAULT_LANGUAGE, |next| infer_language(next));
                fixed.push(format!("```{tag}"));
            }
            _ => fixed.push(current.clone()),
        }
    }

    fixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("docker run nginx", "bash")]
    #[case("git clone repo", "bash")]
    #[case("services:", "yaml")]
    #[case("{\"a\":1}", "json")]
    #[case("[1, 2, 3]", "json")]
    #[case("<div>hi</div>", "html")]
    #[case("import os", "python")]
    #[case("const x = 1;", "javascript")]
    #[case("select * from users", "sql")]
    #[case("#!/usr/bin/env bash", "bash")]
    #[case("#!/usr/bin/env python3", "python")]
    #[case("#include <stdio.h>", "c")]
    #[case("something else entirely", "bash")]
    fn infers_language(#[case] first_line: &str, #[case] expected: &str) {
        assert_eq!(infer_language(first_line), expected);
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // `docker run {x}` is shell before it is json
        assert_eq!(infer_language("docker run {x}"), "bash");
    }

    fn run(input: &[&str]) -> Vec<String> {
        let lines: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        apply(&lines, &FixOptions::default())
    }

    #[test]
    fn tags_bare_opening_fence() {
        assert_eq!(
            run(&["```", "docker run nginx", "```"]),
            vec!["```bash", "docker run nginx", "```"]
        );
    }

    #[test]
    fn leaves_closing_fence_alone() {
        let fixed = run(&["```", "{\"a\":1}", "```", "after"]);
        assert_eq!(fixed, vec!["```json", "{\"a\":1}", "```", "after"]);
    }

    #[test]
    fn leaves_tagged_fence_alone() {
        let fixed = run(&["```python", "import os", "```"]);
        assert_eq!(fixed, vec!["```python", "import os", "```"]);
    }

    #[test]
    fn fence_at_end_of_document_defaults() {
        assert_eq!(run(&["text", "```"]), vec!["text", "```bash"]);
    }

    #[test]
    fn empty_fenced_block_defaults() {
        assert_eq!(run(&["```", "```"]), vec!["```bash", "```"]);
    }
}
