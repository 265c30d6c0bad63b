//! Scriptsmith CLI Library
//!
//! Command-line interface over the `scriptsmith` script generator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, CompileArgs, FrameworkArg, GenerateArgs, TemplatesArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Reporter;

/// Build the runtime configuration from parsed arguments
#[must_use]
pub fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
}

/// Install the stderr `tracing` subscriber; `RUST_LOG` overrides the verbosity flags
pub fn init_tracing(verbosity: Verbosity) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.log_filter()));
    // A second install (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> CliResult<()> {
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    match cli.command {
        Commands::Generate(args) => handlers::execute_generate(&config, &args),
        Commands::Compile(args) => handlers::execute_compile(&config, &args),
        Commands::Templates(args) => handlers::execute_templates(&config, &args),
    }
}
