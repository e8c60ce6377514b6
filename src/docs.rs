//! Documentation completeness checks.
//!
//! Only a missing documentation file is a hard failure. Section headings and
//! the usage example are advisory: each miss records a warning outcome and
//! the validator still reports overall success.

use std::fs;
use std::path::Path;

use crate::report::{CheckerResult, ValidationOutcome};
use crate::rules::RuleSet;

/// Check the benchmark documentation for required sections and a usage
/// example.
pub fn check(docs: &Path, rules: &RuleSet) -> CheckerResult {
    let mut result = CheckerResult::new();

    if !docs.exists() {
        result.record(ValidationOutcome::fail(
            "Documentation",
            format!("{} not found", docs.display()),
        ));
        return result;
    }

    let content = match fs::read_to_string(docs) {
        Ok(content) => content,
        Err(e) => {
            result.record(ValidationOutcome::fail(
                "Documentation",
                format!("Cannot read {}: {}", docs.display(), e),
            ));
            return result;
        }
    };

    for section in &rules.doc_sections {
        let name = format!("Section '{}'", section);
        if content.contains(section.as_str()) {
            result.record(ValidationOutcome::pass(name, "Present"));
        } else {
            result.record(ValidationOutcome::warn(name, "Missing section heading"));
        }
    }

    if content.contains(&rules.usage_fence) && content.contains(&rules.usage_invocation) {
        result.record(ValidationOutcome::pass(
            "Usage example",
            "Usage examples provided",
        ));
    } else {
        result.record(ValidationOutcome::warn(
            "Usage example",
            "Missing usage examples",
        ));
    }

    result
}
