//! Report printing
//!
//! Failures go to stderr, the success line and JSON go to stdout.

use crate::config::{ColorChoice, OutputFormat};
use crate::error::{CliError, CliResult};
use console::{style, Term};
use radius_check::report::{FAILURE_HEADER, REMEDIATION_HINT, SUCCESS_MESSAGE};
use radius_check::{render_json, ScanReport, Violation};

/// Writes scan results to the terminal
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Color the stdout lines
    pub color_out: bool,
    /// Color the stderr lines
    pub color_err: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ColorChoice::Never, false)
    }
}

impl Reporter {
    /// Create a new reporter; `Auto` color is decided per stream
    #[must_use]
    pub fn new(color: ColorChoice, quiet: bool) -> Self {
        let out = Term::stdout();
        let err = Term::stderr();
        Self {
            color_out: color.should_color(&out),
            color_err: color.should_color(&err),
            out,
            err,
            quiet,
        }
    }

    /// Print a report in the requested format
    pub fn report(&self, report: &ScanReport, format: OutputFormat) -> CliResult<()> {
        match format {
            OutputFormat::Text => self.text(report),
            OutputFormat::Json => self.json(report),
        }
    }

    /// Print the scanned file list (verbose mode)
    pub fn files(&self, report: &ScanReport) -> CliResult<()> {
        for file in &report.files {
            self.err
                .write_line(&format!("  scanned {}", report.relative(file).display()))?;
        }
        Ok(())
    }

    /// Print arbitrary text to stdout
    pub fn raw(&self, text: &str) -> CliResult<()> {
        self.out.write_str(text)?;
        Ok(())
    }

    fn text(&self, report: &ScanReport) -> CliResult<()> {
        if report.passed() {
            if !self.quiet {
                let line = if self.color_out {
                    style(SUCCESS_MESSAGE).green().to_string()
                } else {
                    SUCCESS_MESSAGE.to_string()
                };
                self.out.write_line(&line)?;
            }
            return Ok(());
        }

        // Failures are printed even in quiet mode
        let header = if self.color_err {
            style(FAILURE_HEADER).red().bold().to_string()
        } else {
            FAILURE_HEADER.to_string()
        };
        self.err.write_line("")?;
        self.err.write_line(&header)?;
        self.err.write_line("")?;
        for v in &report.violations {
            self.err
                .write_line(&format_violation(report, v, self.color_err))?;
        }
        self.err.write_line("")?;
        self.err.write_line(REMEDIATION_HINT)?;
        self.err.write_line("")?;
        Ok(())
    }

    fn json(&self, report: &ScanReport) -> CliResult<()> {
        let json = render_json(report).map_err(|e| CliError::report_generation(e.to_string()))?;
        self.out.write_line(&json)?;
        Ok(())
    }
}

/// Two-line entry: `- path:line  message` then `  → token`
pub fn format_violation(report: &ScanReport, v: &Violation, use_color: bool) -> String {
    let location = format!("{}:{}", report.relative(&v.file).display(), v.line);
    if use_color {
        format!(
            "- {}  {}\n  → {}",
            style(location).bold(),
            v.message,
            style(&v.token).yellow()
        )
    } else {
        format!("- {}  {}\n  → {}", location, v.message, v.token)
    }
}
