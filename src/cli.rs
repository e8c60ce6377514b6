//! CLI argument definitions for benchcheck.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::paths;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE"),
);

#[derive(Parser)]
#[command(name = "benchcheck")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Static compliance checks for the snek benchmark suite", long_about = None)]
#[command(
    after_help = "With no arguments, benchcheck inspects benchmark.zig, build.zig, Makefile,\nand BENCHMARK.md in the current directory and exits 0 when every check passes."
)]
pub struct Cli {
    /// Path to the benchmark source artifact
    #[arg(long, value_name = "PATH", default_value = paths::ARTIFACT_FILE)]
    pub artifact: PathBuf,

    /// Path to the primary build manifest
    #[arg(long, value_name = "PATH", default_value = paths::PRIMARY_MANIFEST)]
    pub build_manifest: PathBuf,

    /// Path to the secondary task-runner manifest
    #[arg(long, value_name = "PATH", default_value = paths::SECONDARY_MANIFEST)]
    pub taskfile: PathBuf,

    /// Path to the benchmark documentation
    #[arg(long, value_name = "PATH", default_value = paths::DOCS_FILE)]
    pub docs: PathBuf,

    /// Report every missing structural marker instead of stopping at the
    /// first
    #[arg(long)]
    pub scan_all: bool,

    /// Report format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Suppress progress lines for passing and advisory checks
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_are_legacy_names() {
        let cli = Cli::parse_from(["benchcheck"]);
        assert_eq!(cli.artifact, PathBuf::from("benchmark.zig"));
        assert_eq!(cli.build_manifest, PathBuf::from("build.zig"));
        assert_eq!(cli.taskfile, PathBuf::from("Makefile"));
        assert_eq!(cli.docs, PathBuf::from("BENCHMARK.md"));
        assert!(!cli.scan_all);
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_path_overrides() {
        let cli = Cli::parse_from([
            "benchcheck",
            "--artifact",
            "fixtures/bench.zig",
            "--docs",
            "fixtures/DOC.md",
            "--scan-all",
        ]);
        assert_eq!(cli.artifact, PathBuf::from("fixtures/bench.zig"));
        assert_eq!(cli.docs, PathBuf::from("fixtures/DOC.md"));
        assert!(cli.scan_all);
    }
}
