//! Structural checks against the benchmark source artifact.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::report::{CheckerResult, ValidationOutcome};
use crate::rules::{RuleSet, ValidationRule};

/// Marker-scan strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Stop at the first missing required check.
    #[default]
    FailFast,
    /// Report every missing check in one pass.
    ScanAll,
}

/// Check the benchmark source against the structural rules.
///
/// Markers are evaluated in declaration order. In fail-fast mode the scan
/// stops at the first missing required marker or substring; in scan-all mode
/// every check runs and records its outcome.
pub fn check(artifact: &Path, rules: &RuleSet, mode: ScanMode) -> CheckerResult {
    let mut result = CheckerResult::new();

    if !artifact.exists() {
        result.record(ValidationOutcome::fail(
            "Source artifact",
            format!("{} not found", artifact.display()),
        ));
        return result;
    }

    let content = match fs::read_to_string(artifact) {
        Ok(content) => content,
        Err(e) => {
            result.record(ValidationOutcome::fail(
                "Source artifact",
                format!("Cannot read {}: {}", artifact.display(), e),
            ));
            return result;
        }
    };

    for marker in &rules.markers {
        if marker_present(&content, &marker.pattern) {
            result.record(ValidationOutcome::pass(
                marker.description.as_str(),
                format!("Found: {}", marker.pattern),
            ));
        } else {
            result.record(ValidationOutcome::fail(
                marker.description.as_str(),
                format!("Missing: {}", marker.pattern),
            ));
            if mode == ScanMode::FailFast {
                return result;
            }
        }
    }

    // In fail-fast mode a miss on a required substring halts the remaining
    // checks, same as a missing marker.
    if !substring_check(&mut result, &content, &rules.timing_call)
        && mode == ScanMode::FailFast
    {
        return result;
    }

    if !substring_check(&mut result, &content, &rules.iteration_marker)
        && mode == ScanMode::FailFast
    {
        return result;
    }

    if content.contains(&rules.allocator_marker.pattern) {
        result.record(ValidationOutcome::pass(
            rules.allocator_marker.description.as_str(),
            "Memory allocator handling present",
        ));
    } else {
        result.record(ValidationOutcome::warn(
            rules.allocator_marker.description.as_str(),
            "No explicit memory allocator usage (might be OK)",
        ));
    }

    let lines = line_count(&content);
    if lines > rules.min_lines {
        result.record(ValidationOutcome::pass(
            "Line count",
            format!("Substantial implementation ({} lines)", lines),
        ));
    } else {
        result.record(ValidationOutcome::warn(
            "Line count",
            format!("Small implementation ({} lines)", lines),
        ));
    }

    result
}

/// Evaluate a required substring rule, recording its outcome. Returns whether
/// the substring was present so fail-fast callers can stop on a miss.
fn substring_check(result: &mut CheckerResult, content: &str, rule: &ValidationRule) -> bool {
    if content.contains(&rule.pattern) {
        result.record(ValidationOutcome::pass(
            rule.description.as_str(),
            format!("Found: {}", rule.pattern),
        ));
        true
    } else {
        result.record(ValidationOutcome::fail(
            rule.description.as_str(),
            format!("Missing: {}", rule.pattern),
        ));
        false
    }
}

fn marker_present(content: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(content),
        Err(_) => false,
    }
}

/// Newline count, matching how the legacy checker sized artifacts.
fn line_count(content: &str) -> usize {
    content.matches('\n').count()
}
