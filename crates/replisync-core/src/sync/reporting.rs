//! Sync cycle reporting

use std::fmt::Write;

use super::CycleReport;
use super::actions::SyncAction;

/// Sync cycle reporter
pub struct SyncReporter;

impl SyncReporter {
    /// Generate a summary of a finished cycle
    #[must_use]
    pub fn generate_summary(report: &CycleReport) -> String {
        let mut output = String::new();

        if report.dry_run {
            output.push_str("\n=== Sync Summary (dry run) ===\n");
        } else {
            output.push_str("\n=== Sync Summary ===\n");
        }
        let _ = writeln!(output, "Removed:  {}", report.removed.len());
        for name in &report.removed {
            let _ = writeln!(output, "  - {}", name.to_string_lossy());
        }
        let _ = writeln!(output, "Copied:   {}", report.copied.len());
        for name in &report.copied {
            let _ = writeln!(output, "  + {}", name.to_string_lossy());
        }

        let _ = writeln!(output, "\nTotal operations: {}", report.total_operations());

        if report.is_noop() {
            output.push_str("Status: ✓ Already in sync\n");
        } else {
            output.push_str("Status: ✓ Success\n");
        }

        output
    }

    /// Generate a listing of pending actions
    #[must_use]
    pub fn generate_pending(actions: &[SyncAction]) -> String {
        let mut output = String::new();

        if actions.is_empty() {
            output.push_str("Replica is in sync with source.\n");
            return output;
        }

        let _ = writeln!(output, "Pending actions ({}):", actions.len());
        for action in actions {
            let _ = writeln!(output, "  {action}");
        }

        output
    }
}
