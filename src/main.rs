//! CLI entry point for benchcheck.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;

use benchcheck::artifacts::ArtifactSet;
use benchcheck::cli::{Cli, Commands};
use benchcheck::report::{self, Report, ReportFormat, ReportOptions};
use benchcheck::rules::RuleSet;
use benchcheck::structure::ScanMode;
use benchcheck::ui;

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "benchcheck", &mut io::stdout());
        return;
    }

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let format = match cli.format.to_lowercase().as_str() {
        "text" => ReportFormat::Text,
        "json" => ReportFormat::Json,
        other => {
            eprintln!("Unknown format '{}'. Use 'text' or 'json'.", other);
            std::process::exit(2);
        }
    };

    match run_checks(&cli, format) {
        Ok(report) => {
            std::process::exit(if report.passed { 0 } else { 1 });
        }
        Err(e) => {
            eprintln!("{} {:#}", ui::colors::error("error:"), e);
            std::process::exit(1);
        }
    }
}

fn run_checks(cli: &Cli, format: ReportFormat) -> Result<Report> {
    let artifacts = ArtifactSet {
        artifact: cli.artifact.clone(),
        primary_manifest: cli.build_manifest.clone(),
        secondary_manifest: cli.taskfile.clone(),
        docs: cli.docs.clone(),
    };

    let rules = RuleSet::benchmark_suite();
    let opts = ReportOptions {
        scan_mode: if cli.scan_all {
            ScanMode::ScanAll
        } else {
            ScanMode::FailFast
        },
        format,
        quiet: cli.quiet,
    };

    report::run(&artifacts, &rules, &opts)
}
