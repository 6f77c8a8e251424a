//! Identification report rendering
//!
//! Collects the outcome of each capture session into a plain-text summary.

use crate::session::IdentificationStatus;
use chrono::Utc;
use std::fmt::Write;
use std::path::PathBuf;

/// Result of identifying one capture file
#[derive(Debug, Clone)]
pub struct CaptureReport {
    /// Capture file path
    pub path: PathBuf,
    /// Frames fed into the eliminator
    pub frames: usize,
    /// Malformed lines skipped (when skipping is enabled)
    pub skipped_lines: usize,
    /// Frame count at which the candidate set settled, if it did
    pub settled_after: Option<usize>,
    /// Final session status
    pub status: IdentificationStatus,
    /// Remaining candidates when still ambiguous (sorted)
    pub remaining: Vec<String>,
}

/// Render reports for all captures into one text block
pub fn render(reports: &[CaptureReport]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Platform Identification Report");
    let _ = writeln!(out, "Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(out);

    for report in reports {
        let _ = writeln!(out, "Capture: {}", report.path.display());
        let _ = writeln!(out, "  Frames:  {}", report.frames);
        if report.skipped_lines > 0 {
            let _ = writeln!(out, "  Skipped: {} malformed line(s)", report.skipped_lines);
        }
        match &report.status {
            IdentificationStatus::Identified(name) => {
                let _ = writeln!(out, "  Result:  IDENTIFIED {}", name);
            }
            IdentificationStatus::NoMatch => {
                let _ = writeln!(out, "  Result:  NO MATCH (no cataloged platform fits)");
            }
            IdentificationStatus::Ambiguous(n) => {
                let _ = writeln!(out, "  Result:  AMBIGUOUS ({} candidates)", n);
                for name in &report.remaining {
                    let _ = writeln!(out, "           - {}", name);
                }
            }
        }
        if let Some(frame) = report.settled_after {
            let _ = writeln!(out, "  Settled after frame {}", frame);
        }
        let _ = writeln!(out);
    }

    let identified = reports
        .iter()
        .filter(|r| matches!(r.status, IdentificationStatus::Identified(_)))
        .count();
    let _ = writeln!(
        out,
        "Summary: {}/{} capture(s) identified",
        identified,
        reports.len()
    );

    out
}
