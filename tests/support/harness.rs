use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use benchcheck::artifacts::ArtifactSet;

/// A primary build manifest referencing both the task token and the artifact
/// file name.
pub const BUILD_ZIG: &str = r#"const std = @import("std");

pub fn build(b: *std.Build) void {
    const bench = b.addExecutable(.{
        .name = "benchmark",
        .root_source_file = .{ .path = "benchmark.zig" },
    });
    const bench_step = b.step("benchmark", "Run the benchmark suite");
    bench_step.dependOn(&b.addRunArtifact(bench).step);
}
"#;

/// A task-runner manifest declaring the benchmark target.
pub const MAKEFILE: &str = "benchmark:\n\tzig build benchmark\n\nclean:\n\trm -rf zig-out\n";

/// Documentation carrying all six required sections and a usage example.
pub const BENCHMARK_MD: &str = r#"# Snek Benchmarks

## Quick Start

```bash
make benchmark
```

## Benchmark Components

### Snake Movement

Moves a snake of growing length across the grid.

### Collision Detection

Checks self- and wall-collision on every step.

### Food Generation

Places food on free cells.

### Complete Game Simulation

Runs full games to completion.
"#;

/// TestHarness provides isolated fixture projects with the full checked
/// layout: benchmark.zig, build.zig, Makefile, and BENCHMARK.md. The default
/// fixture passes every check with no warnings.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub benchcheck_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let harness = TestHarness {
            dir,
            benchcheck_binary: PathBuf::from(env!("CARGO_BIN_EXE_benchcheck")),
        };

        harness.write_file("benchmark.zig", &compliant_artifact(250));
        harness.write_file("build.zig", BUILD_ZIG);
        harness.write_file("Makefile", MAKEFILE);
        harness.write_file("BENCHMARK.md", BENCHMARK_MD);
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The fixture's artifact locations.
    #[allow(dead_code)]
    pub fn artifacts(&self) -> ArtifactSet {
        ArtifactSet::rooted_at(self.path())
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).expect("Failed to write fixture file");
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.path().join(name)).expect("Failed to remove fixture file");
    }

    /// Executes the benchcheck binary with the given arguments in the
    /// fixture directory.
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> std::process::Output {
        Command::new(&self.benchcheck_binary)
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run benchcheck binary")
    }
}

/// A benchmark source containing all 8 structural markers plus the timing,
/// iteration, and allocator substrings, padded to the requested line count.
pub fn compliant_artifact(pad_to_lines: usize) -> String {
    let mut source = String::from(
        r#"const std = @import("std");

const XY = struct { x: u32, y: u32 };

fn Snake(maxSize: u32) type {
    return struct { body: [maxSize]XY, len: u32 };
}

fn BenchmarkGame(maxSize: u32) type {
    return struct { snake: Snake(maxSize), food: XY };
}

fn benchmarkSnakeMovement() void {}
fn benchmarkCollisionDetection() void {}
fn benchmarkFoodGeneration() void {}
fn benchmarkCompleteGameSimulation() void {}

pub fn main() !void {
    var gpa = std.heap.GeneralPurposeAllocator(.{}){};
    const allocator = gpa.allocator();
    _ = allocator;
    const iterations: u32 = 1000;
    _ = iterations;
    const start = std.time.nanoTimestamp();
    _ = start;
}
"#,
    );
    while source.matches('\n').count() < pad_to_lines {
        source.push_str("// padding\n");
    }
    source
}
