//! Check outcomes, result aggregation, and report rendering.
//!
//! Validators return plain [`CheckerResult`] values; this module runs them in
//! fixed order, renders each outcome as it is produced, and computes the
//! final verdict the entry point maps to an exit code.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::artifacts::ArtifactSet;
use crate::rules::RuleSet;
use crate::structure::ScanMode;
use crate::ui;
use crate::{docs, manifests, structure};

/// Severity of a single check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Pass,
    Fail,
    Warn,
}

/// One evaluated rule or check.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub check: String,
    pub status: OutcomeStatus,
    pub detail: String,
}

impl ValidationOutcome {
    pub fn pass(check: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            status: OutcomeStatus::Pass,
            detail: detail.into(),
        }
    }

    pub fn fail(check: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            status: OutcomeStatus::Fail,
            detail: detail.into(),
        }
    }

    pub fn warn(check: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            status: OutcomeStatus::Warn,
            detail: detail.into(),
        }
    }
}

/// Ordered outcomes of one validator plus its overall verdict.
///
/// `overall` starts true and flips to false on the first failing outcome;
/// warnings never affect it.
#[derive(Debug, Clone, Serialize)]
pub struct CheckerResult {
    pub outcomes: Vec<ValidationOutcome>,
    pub overall: bool,
}

impl CheckerResult {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            overall: true,
        }
    }

    /// Append an outcome, flipping `overall` if it failed.
    pub fn record(&mut self, outcome: ValidationOutcome) {
        if outcome.status == OutcomeStatus::Fail {
            self.overall = false;
        }
        self.outcomes.push(outcome);
    }

    /// Returns the list of failing outcomes.
    pub fn failures(&self) -> Vec<&ValidationOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Fail)
            .collect()
    }

    /// Returns the list of warning outcomes.
    pub fn warnings(&self) -> Vec<&ValidationOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Warn)
            .collect()
    }
}

impl Default for CheckerResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate of the three validator results.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub structure: CheckerResult,
    pub build_integration: CheckerResult,
    pub documentation: CheckerResult,
    pub passed: bool,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Options controlling a check run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub scan_mode: ScanMode,
    pub format: ReportFormat,
    /// Suppress progress lines for passing and advisory checks.
    pub quiet: bool,
}

/// Run the three validators in fixed order and render the report.
///
/// In text mode each validator's outcomes print immediately after it runs,
/// before the next validator starts, followed by the summary block. In JSON
/// mode nothing prints until the final serialized report.
pub fn run(artifacts: &ArtifactSet, rules: &RuleSet, opts: &ReportOptions) -> Result<Report> {
    let text = opts.format == ReportFormat::Text;

    if text && !opts.quiet {
        println!(
            "{}",
            ui::colors::heading(&format!(
                "Checking {} structure...",
                artifacts.artifact.display()
            ))
        );
    }
    let structure = structure::check(&artifacts.artifact, rules, opts.scan_mode);
    if text {
        render_outcomes(&structure, opts.quiet);
    }

    if text && !opts.quiet {
        println!();
        println!("{}", ui::colors::heading("Checking build integration..."));
    }
    let build_integration = manifests::check(artifacts, rules);
    if text {
        render_outcomes(&build_integration, opts.quiet);
    }

    if text && !opts.quiet {
        println!();
        println!("{}", ui::colors::heading("Checking documentation..."));
    }
    let documentation = docs::check(&artifacts.docs, rules);
    if text {
        render_outcomes(&documentation, opts.quiet);
    }

    let passed = structure.overall && build_integration.overall && documentation.overall;
    let report = Report {
        generated_at: crate::utc_now_iso(),
        structure,
        build_integration,
        documentation,
        passed,
    };

    match opts.format {
        ReportFormat::Text => render_summary(&report),
        ReportFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(report)
}

fn render_outcomes(result: &CheckerResult, quiet: bool) {
    for outcome in &result.outcomes {
        if quiet && outcome.status != OutcomeStatus::Fail {
            continue;
        }
        println!(
            "  {} {}: {}",
            ui::status_glyph(outcome.status),
            outcome.check,
            outcome.detail
        );
    }
}

fn render_summary(report: &Report) {
    println!();
    println!("{}", ui::format::separator(44));
    println!("{}", ui::colors::heading("Validation summary"));
    summary_line("Benchmark implementation", &report.structure);
    summary_line("Build integration", &report.build_integration);
    summary_line("Documentation", &report.documentation);

    println!();
    if report.passed {
        println!(
            "{}",
            ui::colors::success("All checks passed. Benchmark suite is ready.")
        );
        println!();
        println!("To run the benchmarks:");
        println!("  1. Install Zig (https://ziglang.org/)");
        println!("  2. Run: make benchmark");
        println!("  3. Or run: zig build benchmark");
    } else {
        println!(
            "{}",
            ui::colors::error("Some checks failed. Review the issues above.")
        );
    }
}

fn summary_line(label: &str, result: &CheckerResult) {
    let verdict = ui::verdict(result.overall);
    let warnings = result.warnings().len();
    if warnings > 0 {
        println!(
            "  {:<26} {} {}",
            label,
            verdict,
            ui::colors::secondary(&format!("({} warnings)", warnings))
        );
    } else {
        println!("  {:<26} {}", label, verdict);
    }
}
