//! Script assembly.
//!
//! Turns an ordered list of recorded actions into one block of source text:
//! framework header, one indented block per action, framework footer.
//! Generation never fails; degenerate input produces a placeholder or a
//! literal DOM script.

use tracing::{debug, trace};

use crate::action::Action;
use crate::config::{Config, RawConfig};
use crate::dsl::AssertionCompiler;
use crate::framework::indent_block;
use crate::locator::{query_selector, resolve_locator};
use crate::template::{action_template, assertion_template, render};

/// Output for an empty action list
pub const NO_ACTIONS_PLACEHOLDER: &str = "// No actions selected.";

/// Emitted for assertion requests when no configuration is given
pub const ASSERTION_UNSUPPORTED: &str = "// Assertion not supported in plain JS";

/// Prefix of the comment echoing an instruction that did not compile
pub const INSTRUCTION_ECHO_PREFIX: &str = "// User validation: ";

/// Generate a script.
///
/// Without a configuration the output is a literal DOM script; with one it
/// is normalized first and rendered through [`ScriptGenerator`].
///
/// # Example
///
/// ```
/// use scriptsmith::{generate, Action};
///
/// let script = generate(&[Action::input("#q", "rust")], None);
/// assert_eq!(script, r##"document.querySelector("#q").value = "rust";"##);
/// ```
#[must_use]
pub fn generate(actions: &[Action], config: Option<&RawConfig>) -> String {
    match config {
        None => generate_fallback(actions),
        Some(raw) => ScriptGenerator::from_raw(raw).generate(actions),
    }
}

/// Literal DOM script using raw selectors, for when no configuration exists
#[must_use]
pub fn generate_fallback(actions: &[Action]) -> String {
    if actions.is_empty() {
        return NO_ACTIONS_PLACEHOLDER.to_string();
    }
    let mut lines = Vec::with_capacity(actions.len());
    for action in actions {
        let element = query_selector(&action.selector);
        lines.push(match action.value() {
            None => format!("{element}.click();"),
            Some(value) => format!("{element}.value = \"{value}\";"),
        });
        if action.assert {
            lines.push(ASSERTION_UNSUPPORTED.to_string());
        }
    }
    lines.join("\n")
}

/// Generates scripts for one normalized configuration
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    config: Config,
    compiler: AssertionCompiler,
}

impl ScriptGenerator {
    /// Create a generator for a normalized configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        let compiler = AssertionCompiler::new(config.framework);
        Self { config, compiler }
    }

    /// Normalize `raw` and create a generator for it
    #[must_use]
    pub fn from_raw(raw: &RawConfig) -> Self {
        Self::new(Config::normalize(Some(raw)))
    }

    /// The normalized configuration
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Assemble the full script
    #[must_use]
    pub fn generate(&self, actions: &[Action]) -> String {
        if actions.is_empty() {
            return NO_ACTIONS_PLACEHOLDER.to_string();
        }
        let target = self.config.framework.target();
        let mut lines: Vec<String> = target.header().iter().map(|l| (*l).to_string()).collect();
        for (index, action) in actions.iter().enumerate() {
            trace!(index, kind = %action.kind(), selector = action.selector.as_str(), "rendering action");
            lines.push(indent_block(&self.render_action(action)));
        }
        lines.extend(target.footer().iter().map(|l| (*l).to_string()));
        debug!(
            framework = %self.config.framework,
            actions = actions.len(),
            "script generated"
        );
        lines.join("\n")
    }

    /// Code for one action, before indentation
    #[must_use]
    pub fn render_action(&self, action: &Action) -> String {
        let templates = &self.config.templates;
        let selector = action.selector.as_str();
        let locator = resolve_locator(selector, &self.config.locator_map, self.config.framework);

        let Some(request) = action.assertion() else {
            let template = action_template(action.kind(), templates);
            return render(template, &locator, selector, action.value());
        };

        let line = render(
            assertion_template(request.kind, templates),
            &locator,
            selector,
            action.value(),
        );
        let Some(instruction) = request.instruction else {
            return line;
        };
        self.compiler
            .compile(&instruction, selector, &locator)
            .unwrap_or_else(|| {
                // Keep the comment on one line so the script stays valid
                let echoed = instruction.lines().collect::<Vec<_>>().join(" ");
                format!("{line}\n{INSTRUCTION_ECHO_PREFIX}{echoed}")
            })
    }
}

impl Default for ScriptGenerator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
