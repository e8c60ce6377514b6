//! Rule definitions for the compliance checklist.
//!
//! Rule sets are plain data built once at startup and passed into the
//! validators explicitly. Structural markers match as regular expressions;
//! every other textual rule matches as a literal substring.

/// A single declarative validation rule.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    /// The pattern to look for. Regex syntax for structural markers,
    /// literal text for substring rules.
    pub pattern: String,
    /// Human-readable name of the construct the rule looks for.
    pub description: String,
    /// Required rules fail the owning validator when absent; advisory rules
    /// only record a warning.
    pub required: bool,
}

impl ValidationRule {
    pub fn required(pattern: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            description: description.into(),
            required: true,
        }
    }

    pub fn advisory(pattern: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            description: description.into(),
            required: false,
        }
    }
}

/// The full checklist evaluated by the three validators.
///
/// Contents are fixed at construction; there is no dynamic rule
/// registration.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Structural markers, evaluated in declaration order against the
    /// benchmark source. All regex patterns.
    pub markers: Vec<ValidationRule>,
    /// Performance-timing call the benchmark must make.
    pub timing_call: ValidationRule,
    /// Iteration-configuration substring the benchmark must contain.
    pub iteration_marker: ValidationRule,
    /// Memory-allocator usage substring. Advisory.
    pub allocator_marker: ValidationRule,
    /// Artifacts with at most this many lines record a size warning.
    pub min_lines: usize,
    /// Task-name token the build manifests must reference.
    pub task_name: String,
    /// Section headings the documentation should carry. Advisory.
    pub doc_sections: Vec<String>,
    /// Fence opener that introduces a usage example in the documentation.
    pub usage_fence: String,
    /// Literal invocation the usage example should show.
    pub usage_invocation: String,
}

impl RuleSet {
    /// The checklist for the snek benchmark suite.
    pub fn benchmark_suite() -> Self {
        Self {
            markers: vec![
                ValidationRule::required(r"const XY = struct", "Coordinate struct"),
                ValidationRule::required(r"fn Snake\(maxSize: u32\) type", "Snake type constructor"),
                ValidationRule::required(
                    r"fn BenchmarkGame\(maxSize: u32\) type",
                    "Game type constructor",
                ),
                ValidationRule::required(r"fn benchmarkSnakeMovement", "Snake movement benchmark"),
                ValidationRule::required(
                    r"fn benchmarkCollisionDetection",
                    "Collision detection benchmark",
                ),
                ValidationRule::required(r"fn benchmarkFoodGeneration", "Food generation benchmark"),
                ValidationRule::required(
                    r"fn benchmarkCompleteGameSimulation",
                    "Complete game simulation benchmark",
                ),
                ValidationRule::required(r"pub fn main\(\)", "Entry point"),
            ],
            timing_call: ValidationRule::required(
                "std.time.nanoTimestamp()",
                "Performance timing",
            ),
            iteration_marker: ValidationRule::required("iterations", "Benchmark iterations"),
            allocator_marker: ValidationRule::advisory("allocator", "Memory allocator usage"),
            min_lines: 200,
            task_name: "benchmark".to_string(),
            doc_sections: vec![
                "Quick Start".to_string(),
                "Benchmark Components".to_string(),
                "Snake Movement".to_string(),
                "Collision Detection".to_string(),
                "Food Generation".to_string(),
                "Complete Game Simulation".to_string(),
            ],
            usage_fence: "```bash".to_string(),
            usage_invocation: "make benchmark".to_string(),
        }
    }

    /// The task-name token formatted as a task-runner declaration.
    pub fn task_declaration(&self) -> String {
        format!("{}:", self.task_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_suite_marker_count() {
        let rules = RuleSet::benchmark_suite();
        assert_eq!(rules.markers.len(), 8);
        assert!(rules.markers.iter().all(|m| m.required));
    }

    #[test]
    fn test_benchmark_suite_advisory_rules() {
        let rules = RuleSet::benchmark_suite();
        assert!(!rules.allocator_marker.required);
        assert!(rules.timing_call.required);
        assert!(rules.iteration_marker.required);
    }

    #[test]
    fn test_task_declaration() {
        let rules = RuleSet::benchmark_suite();
        assert_eq!(rules.task_declaration(), "benchmark:");
    }

    #[test]
    fn test_doc_sections() {
        let rules = RuleSet::benchmark_suite();
        assert_eq!(rules.doc_sections.len(), 6);
        assert_eq!(rules.doc_sections[0], "Quick Start");
    }

    #[test]
    fn test_rule_constructors() {
        let required = ValidationRule::required("pat", "desc");
        assert!(required.required);
        assert_eq!(required.pattern, "pat");

        let advisory = ValidationRule::advisory("pat", "desc");
        assert!(!advisory.required);
        assert_eq!(advisory.description, "desc");
    }
}
