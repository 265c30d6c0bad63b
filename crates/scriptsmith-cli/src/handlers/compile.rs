//! Compile command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::CompileArgs;
use scriptsmith::{resolve_locator, AssertionCompiler, Framework};
use std::collections::BTreeMap;
use tracing::debug;

/// Execute the compile command
pub fn execute_compile(_config: &CliConfig, args: &CompileArgs) -> CliResult<()> {
    let instruction = args.instruction.join(" ");
    match compile_instruction(args) {
        Some(code) => {
            println!("{code}");
            Ok(())
        }
        None => Err(CliError::not_understood(instruction)),
    }
}

/// Compile the joined instruction words for the chosen framework
#[must_use]
pub fn compile_instruction(args: &CompileArgs) -> Option<String> {
    let framework = Framework::from(args.framework);
    let instruction = args.instruction.join(" ");
    let locator = args
        .locator
        .clone()
        .unwrap_or_else(|| resolve_locator(&args.selector, &BTreeMap::new(), framework));
    debug!(%framework, %locator, "compiling instruction");
    AssertionCompiler::new(framework).compile(&instruction, &args.selector, &locator)
}
