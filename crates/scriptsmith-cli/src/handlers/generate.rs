//! Generate command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use crate::GenerateArgs;
use scriptsmith::{generate, write_script, Action, RawConfig, Recording, Review};
use tracing::{debug, info};

/// Execute the generate command
pub fn execute_generate(config: &CliConfig, args: &GenerateArgs) -> CliResult<()> {
    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());

    let selection = load_actions(args)?;
    if !selection.stale.is_empty() {
        reporter.warning(&format!(
            "Review mentions actions missing from the recording: {}",
            join_indexes(&selection.stale)
        ));
    }
    if config.verbosity.is_verbose() {
        reporter.info(&format!(
            "Kept {} of {} recorded action(s)",
            selection.actions.len(),
            selection.recorded
        ));
    }

    let raw = args.config.as_ref().map(RawConfig::load).transpose()?;
    if raw.is_none() {
        reporter.info("No configuration given; emitting a literal DOM script");
    }
    let script = render_script(&selection.actions, raw.as_ref());

    if args.stdout {
        println!("{script}");
        return Ok(());
    }

    let destination = args.output.as_ref().unwrap_or(&config.default_output);
    let written = write_script(destination, &script)?;
    info!(path = %written.display(), actions = selection.actions.len(), "script written");
    reporter.success(&format!(
        "Wrote {} action(s) to {}",
        selection.actions.len(),
        written.display()
    ));
    Ok(())
}

/// Reviewed actions ready for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Kept actions, edits applied
    pub actions: Vec<Action>,
    /// Number of actions in the recording
    pub recorded: usize,
    /// Review indexes that point past the recording
    pub stale: Vec<usize>,
}

/// Load the recording and apply reviewer edits
pub fn load_actions(args: &GenerateArgs) -> CliResult<Selection> {
    let recording = Recording::load(&args.actions)?;
    debug!(recorded = recording.len(), "recording loaded");
    let review = build_review(args)?;
    Ok(Selection {
        actions: review.apply(&recording.actions),
        recorded: recording.len(),
        stale: review.stale_indexes(recording.len()).into_iter().collect(),
    })
}

fn join_indexes(indexes: &[usize]) -> String {
    indexes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Review file (if any) with `--select` taking precedence over its selection
pub fn build_review(args: &GenerateArgs) -> CliResult<Review> {
    let review = match &args.review {
        Some(path) => Review::load(path)?,
        None => Review::new(),
    };
    Ok(match &args.select {
        Some(indexes) => review.select(indexes.iter().copied()),
        None => review,
    })
}

/// Render the final script text
#[must_use]
pub fn render_script(actions: &[Action], raw: Option<&RawConfig>) -> String {
    generate(actions, raw)
}
