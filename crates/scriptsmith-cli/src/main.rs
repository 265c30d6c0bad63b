//! Scriptsmith: turn recorded page interactions into automation scripts
//!
//! ## Usage
//!
//! ```bash
//! scriptsmith generate --actions rec.json --config playwright.yaml
//! scriptsmith generate -a rec.json --select 0,2 --stdout
//! scriptsmith compile -f cypress "text ends with 'USD'"
//! scriptsmith templates --framework selenium
//! ```

use clap::Parser;
use scriptsmith_cli::{run, Cli, ColorChoice, Reporter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = Reporter::new(ColorChoice::from(cli.color).should_color(), false);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.failure(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
