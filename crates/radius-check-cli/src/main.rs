//! check-radius: zero-border-radius gate for the site build
//!
//! ## Usage
//!
//! ```bash
//! check-radius                      # scan ./src and ./index.html
//! check-radius --root site          # scan another tree
//! check-radius --format json        # machine-readable report
//! check-radius --show-config        # print effective settings
//! ```

use clap::Parser;
use radius_check_cli::{build_config, execute, logging, show_config, Cli, CliResult, Outcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<Outcome> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    logging::init_tracing(config.verbosity, config.color.should_color(&console::Term::stderr()));

    if cli.show_config {
        show_config(&config)?;
        return Ok(Outcome::Passed);
    }

    execute(&config)
}
