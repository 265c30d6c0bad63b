//! Templates command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::TemplatesArgs;
use scriptsmith::{Config, Framework, RawConfig};

/// Execute the templates command: print the normalized configuration as JSON
pub fn execute_templates(_config: &CliConfig, args: &TemplatesArgs) -> CliResult<()> {
    let normalized = resolve_templates(args)?;
    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}

/// Normalize the configuration file, or the bare framework defaults
pub fn resolve_templates(args: &TemplatesArgs) -> CliResult<Config> {
    let mut raw = match &args.config {
        Some(path) => RawConfig::load(path)?,
        None => RawConfig::default(),
    };
    if let Some(framework) = args.framework {
        raw.framework = Some(Framework::from(framework).name().to_string());
    }
    Ok(Config::normalize(Some(&raw)))
}
