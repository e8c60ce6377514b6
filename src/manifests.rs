//! Build-integration checks against the two build manifests.
//!
//! The primary manifest (the declarative build descriptor) must reference
//! both the task-name token and the artifact file name; the secondary
//! manifest (the task-runner file) must declare the task. A missing manifest
//! short-circuits that manifest's check only; the other is still evaluated.

use std::fs;
use std::path::Path;

use crate::artifacts::ArtifactSet;
use crate::report::{CheckerResult, ValidationOutcome};
use crate::rules::RuleSet;

/// Check both build manifests for benchmark-target integration.
pub fn check(artifacts: &ArtifactSet, rules: &RuleSet) -> CheckerResult {
    let mut result = CheckerResult::new();

    check_primary(&mut result, artifacts, rules);
    check_secondary(&mut result, &artifacts.secondary_manifest, rules);

    result
}

fn check_primary(result: &mut CheckerResult, artifacts: &ArtifactSet, rules: &RuleSet) {
    let path = &artifacts.primary_manifest;
    let content = match read_manifest(result, "Build manifest", path) {
        Some(content) => content,
        None => return,
    };

    let artifact_name = artifacts.artifact_name();
    if content.contains(&rules.task_name) && content.contains(&artifact_name) {
        result.record(ValidationOutcome::pass(
            "Build manifest",
            format!("{} includes the {} target", file_name(path), rules.task_name),
        ));
    } else {
        result.record(ValidationOutcome::fail(
            "Build manifest",
            format!(
                "{} missing {} integration",
                file_name(path),
                rules.task_name
            ),
        ));
    }
}

fn check_secondary(result: &mut CheckerResult, path: &Path, rules: &RuleSet) {
    let content = match read_manifest(result, "Task runner", path) {
        Some(content) => content,
        None => return,
    };

    let declaration = rules.task_declaration();
    if content.contains(&declaration) {
        result.record(ValidationOutcome::pass(
            "Task runner",
            format!("{} declares the {} target", file_name(path), rules.task_name),
        ));
    } else {
        result.record(ValidationOutcome::fail(
            "Task runner",
            format!("{} missing the {} target", file_name(path), declaration),
        ));
    }
}

/// Read a manifest, recording a failing outcome when it is absent or
/// unreadable.
fn read_manifest(result: &mut CheckerResult, check: &str, path: &Path) -> Option<String> {
    if !path.exists() {
        result.record(ValidationOutcome::fail(
            check,
            format!("{} not found", path.display()),
        ));
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            result.record(ValidationOutcome::fail(
                check,
                format!("Cannot read {}: {}", path.display(), e),
            ));
            None
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
