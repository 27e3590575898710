//! Production Code Enforcement
//!
//! Library and binary code propagates errors instead of panicking, and does
//! not silence dead-code warnings. Everything from a file's first
//! `#[cfg(test)]` onward is test code and exempt, as are doc comments.

use std::fs;
use std::path::{Path, PathBuf};

const FORBIDDEN: &[(&str, &str)] = &[
    ("#[allow(dead_code)]", "dead code allowance"),
    (".unwrap()", "unwrap in production code"),
    (".expect(", "expect in production code"),
];

#[derive(Debug)]
struct Violation {
    file_path: PathBuf,
    line_number: usize,
    rule: &'static str,
    context: String,
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests crate lives inside the workspace")
        .to_path_buf()
}

/// Source directories of the production crates.
fn production_src_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(workspace_root())
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy())
                .is_some_and(|name| name.starts_with("reelscout-") && name != "reelscout-tests")
        })
        .map(|crate_dir| crate_dir.join("src"))
        .filter(|src| src.is_dir())
        .collect();
    dirs.sort();
    dirs
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap().filter_map(Result::ok) {
        let path = entry.path();
        if path.is_dir() {
            collect_rust_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<Violation>) {
    let content = fs::read_to_string(path).unwrap();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        for (pattern, rule) in FORBIDDEN {
            if trimmed.contains(pattern) {
                violations.push(Violation {
                    file_path: path.to_path_buf(),
                    line_number: index + 1,
                    rule,
                    context: trimmed.to_string(),
                });
            }
        }
    }
}

#[test]
fn test_production_code_is_clean() {
    let dirs = production_src_dirs();
    assert!(!dirs.is_empty(), "no workspace crates found to check");

    let mut files = Vec::new();
    for dir in &dirs {
        collect_rust_files(dir, &mut files);
    }

    let mut violations = Vec::new();
    for file in &files {
        check_file(file, &mut violations);
    }

    if !violations.is_empty() {
        let report: Vec<String> = violations
            .iter()
            .map(|v| {
                format!(
                    "{}:{} {}: {}",
                    v.file_path.display(),
                    v.line_number,
                    v.rule,
                    v.context
                )
            })
            .collect();
        panic!(
            "{} violation(s) in {} file(s) checked:\n{}",
            violations.len(),
            files.len(),
            report.join("\n")
        );
    }
}
