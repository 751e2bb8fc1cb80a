//! radius-check CLI library
//!
//! Argument parsing, logging setup and report printing around
//! [`radius_check::scan_with`]. The binary is a thin wrapper that maps the
//! outcome of [`execute`] to a process exit code.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, FormatArg};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{format_violation, Reporter};

use radius_check::ScanConfig;
use std::path::PathBuf;

/// Outcome of a CLI run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No violations
    Passed,
    /// At least one violation
    Failed,
}

impl Outcome {
    /// Process exit status for this outcome
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }
}

/// Build the CLI configuration from parsed arguments
pub fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
        .with_format(cli.format.into())
        .with_root(root)
        .with_config_file(cli.config.clone())
}

/// Resolve the scan configuration: explicit file, else discovered, else defaults
pub fn load_scan_config(config: &CliConfig) -> CliResult<ScanConfig> {
    let scan_config = match &config.config_file {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::discover(&config.root)?,
    };
    tracing::debug!(
        root = %config.root.display(),
        scan_dirs = ?scan_config.scan_dirs,
        "resolved scan config"
    );
    Ok(scan_config)
}

/// Run a scan and print the report
pub fn execute(config: &CliConfig) -> CliResult<Outcome> {
    let scan_config = load_scan_config(config)?;
    let report = radius_check::scan_with(&config.root, &scan_config)?;

    let reporter = Reporter::new(config.color, config.verbosity.is_quiet());
    if config.verbosity.is_verbose() && config.format == OutputFormat::Text {
        reporter.files(&report)?;
    }
    reporter.report(&report, config.format)?;

    Ok(if report.passed() {
        Outcome::Passed
    } else {
        Outcome::Failed
    })
}

/// Print the effective scan configuration as YAML
pub fn show_config(config: &CliConfig) -> CliResult<()> {
    let scan_config = load_scan_config(config)?;
    let yaml = scan_config
        .to_yaml()
        .map_err(|e| CliError::report_generation(e.to_string()))?;
    Reporter::default().raw(&yaml)
}
