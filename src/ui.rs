//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for status glyphs, colors, and
//! formatting patterns used by the report renderer.

use colored::{ColoredString, Colorize};

use crate::report::OutcomeStatus;

/// Returns a colored glyph for the given outcome status.
///
/// Glyphs:
/// - Pass: ✓ (green)
/// - Fail: ✗ (red)
/// - Warn: ⚠ (yellow)
pub fn status_glyph(status: OutcomeStatus) -> ColoredString {
    match status {
        OutcomeStatus::Pass => "✓".green(),
        OutcomeStatus::Fail => "✗".red(),
        OutcomeStatus::Warn => "⚠".yellow(),
    }
}

/// Returns a colored PASS/FAIL verdict for a summary line.
pub fn verdict(ok: bool) -> ColoredString {
    if ok {
        "✓ PASS".green()
    } else {
        "✗ FAIL".red()
    }
}

/// Color scheme for report text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/completion
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
