//! radius-check: zero-border-radius conformance for web source trees
//!
//! Scans a site's source files and reports every place that would round a
//! corner: non-zero CSS `border-radius`, non-zero inline `borderRadius`, and
//! any `rounded-*` utility class other than `rounded-none`.
//!
//! # Pipeline
//!
//! ```text
//! root ──► collect_files ──► Scanner::scan_file (per file) ──► ScanReport
//! ```
//!
//! ```no_run
//! let report = radius_check::scan(std::path::Path::new(".")).unwrap();
//! if !report.passed() {
//!     eprint!("{}", radius_check::render_text(&report));
//! }
//! ```

#![warn(missing_docs)]

pub mod collector;
pub mod config;
mod error;
pub mod report;
pub mod scanner;
mod violation;

pub use collector::collect_files;
pub use config::{RuleToggles, ScanConfig, DEFAULT_CONFIG_FILE};
pub use error::{CheckError, CheckResult};
pub use report::{render_json, render_text, ScanReport};
pub use scanner::{line_number, Scanner};
pub use violation::{Rule, Violation};

use std::path::Path;

/// Scan `root` with the default configuration
pub fn scan(root: &Path) -> CheckResult<ScanReport> {
    scan_with(root, &ScanConfig::default())
}

/// Scan `root` with an explicit configuration.
///
/// Reads files only; never touches the working directory or exit status.
pub fn scan_with(root: &Path, config: &ScanConfig) -> CheckResult<ScanReport> {
    let scanner = Scanner::new(config)?;
    let mut report = ScanReport::new(root);

    for file in collect_files(root, config)? {
        let violations = scanner.scan_file(&file)?;
        report.violations.extend(violations);
        report.files.push(file);
    }

    tracing::info!(
        root = %root.display(),
        files = report.files_checked(),
        violations = report.violations.len(),
        "radius scan complete"
    );
    Ok(report)
}
