//! Scan reports and their text/JSON renderings

use crate::violation::Violation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Printed when no violations are found
pub const SUCCESS_MESSAGE: &str =
    "✅ Radius check passed (no rounded-* utilities except rounded-none).";

/// Printed before the violation list
pub const FAILURE_HEADER: &str =
    "❌ Radius check failed. Found disallowed rounding utilities / non-zero radius values:";

/// Printed after the violation list
pub const REMEDIATION_HINT: &str =
    "Fix: remove all rounded-* (except rounded-none) and ensure border-radius/borderRadius resolve to 0.";

/// Outcome of one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Scan root
    pub root: PathBuf,
    /// Files scanned, in scan order
    pub files: Vec<PathBuf>,
    /// Violations, in file order then rule order
    pub violations: Vec<Violation>,
}

impl ScanReport {
    /// Create an empty report
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// True when nothing was found
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of files scanned
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Path relative to the scan root, for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Copy with every file path made relative to the root
    #[must_use]
    pub fn to_relative(&self) -> Self {
        Self {
            root: self.root.clone(),
            files: self
                .files
                .iter()
                .map(|f| self.relative(f).to_path_buf())
                .collect(),
            violations: self
                .violations
                .iter()
                .map(|v| Violation {
                    file: self.relative(&v.file).to_path_buf(),
                    ..v.clone()
                })
                .collect(),
        }
    }
}

/// Render the failure listing (header, one entry per violation, hint).
///
/// Returns only the success line when the report passed.
pub fn render_text(report: &ScanReport) -> String {
    if report.passed() {
        return format!("{SUCCESS_MESSAGE}\n");
    }

    let mut output = String::new();
    output.push('\n');
    output.push_str(FAILURE_HEADER);
    output.push_str("\n\n");

    for v in &report.violations {
        output.push_str(&format!(
            "- {}:{}  {}\n  → {}\n",
            report.relative(&v.file).display(),
            v.line,
            v.message,
            v.token
        ));
    }

    output.push('\n');
    output.push_str(REMEDIATION_HINT);
    output.push_str("\n\n");
    output
}

/// Render the report as pretty JSON.
///
/// File paths are written relative to the root, as in the text listing.
pub fn render_json(report: &ScanReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&report.to_relative())
}
