//! # Benchcheck - Benchmark Suite Compliance Checks
//!
//! Benchcheck is a static compliance checker for the snek benchmark suite. It
//! inspects the benchmark source artifact and its surrounding scaffolding
//! (build manifests, documentation) against a fixed checklist and reports
//! pass/fail with a process exit status.
//!
//! ## Overview
//!
//! The checker never compiles or executes anything: every check is textual
//! (regex or substring) inspection of the four project files. Three
//! validators run in fixed order, each producing an ordered list of outcomes,
//! and the final verdict is the conjunction of their results.
//!
//! ## Core Concepts
//!
//! - **Rules**: the declarative checklist — structural markers, required
//!   substrings, documentation sections
//! - **Artifacts**: the four checked file locations, injectable for tests
//! - **Report**: the aggregate of the three validator results
//!
//! ## Modules
//!
//! - [`rules`] - Rule definitions and the default benchmark-suite profile
//! - [`artifacts`] - Locations of the checked files
//! - [`structure`] - Structural checks on the benchmark source
//! - [`manifests`] - Build-integration checks on the two build manifests
//! - [`docs`] - Documentation completeness checks
//! - [`report`] - Aggregation, rendering, and JSON serialization
//!
//! ## Example
//!
//! ```no_run
//! use benchcheck::artifacts::ArtifactSet;
//! use benchcheck::report::{self, ReportOptions};
//! use benchcheck::rules::RuleSet;
//!
//! let artifacts = ArtifactSet::default();
//! let rules = RuleSet::benchmark_suite();
//! let report = report::run(&artifacts, &rules, &ReportOptions::default())
//!     .expect("Failed to produce report");
//!
//! std::process::exit(if report.passed { 0 } else { 1 });
//! ```

// Re-export all public modules
pub mod artifacts;
pub mod cli;
pub mod docs;
pub mod manifests;
pub mod report;
pub mod rules;
pub mod structure;
pub mod ui;

/// Default file name constants for the checked project layout.
pub mod paths {
    /// The benchmark source artifact: `benchmark.zig`
    pub const ARTIFACT_FILE: &str = "benchmark.zig";
    /// The primary build manifest: `build.zig`
    pub const PRIMARY_MANIFEST: &str = "build.zig";
    /// The secondary task-runner manifest: `Makefile`
    pub const SECONDARY_MANIFEST: &str = "Makefile";
    /// The benchmark documentation: `BENCHMARK.md`
    pub const DOCS_FILE: &str = "BENCHMARK.md";
}

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// This function uses `chrono::Utc::now()` to ensure the timestamp is truly in
/// UTC, not local time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
