//! Template rendering.
//!
//! Placeholders are substituted in a fixed order, `{locator}` then
//! `{selector}` then `{value}`, each as a whole-string replace. A missing
//! value leaves `{value}` in place.

use crate::action::{ActionKind, AssertionKind};
use crate::config::ActionTemplates;

/// Click template used when the table has none
pub const DEFAULT_CLICK_TEMPLATE: &str = "{locator}.click();";

/// Input template used when the table has none
pub const DEFAULT_INPUT_TEMPLATE: &str = r#"{locator}.value = "{value}";"#;

/// Substitute placeholders in `template`
#[must_use]
pub fn render(template: &str, locator: &str, selector: &str, value: Option<&str>) -> String {
    let line = template
        .replace("{locator}", locator)
        .replace("{selector}", selector);
    match value {
        Some(value) => line.replace("{value}", value),
        None => line,
    }
}

/// Template for an action kind; never empty
#[must_use]
pub fn action_template(kind: ActionKind, templates: &ActionTemplates) -> &str {
    templates.action(kind).unwrap_or(match kind {
        ActionKind::Click => DEFAULT_CLICK_TEMPLATE,
        ActionKind::Input => DEFAULT_INPUT_TEMPLATE,
    })
}

/// Template for an assertion kind.
///
/// Falls back to the `exists` template, then to an empty string.
#[must_use]
pub fn assertion_template(kind: AssertionKind, templates: &ActionTemplates) -> &str {
    templates
        .get(kind)
        .or_else(|| templates.get(AssertionKind::Exists))
        .unwrap_or_default()
}
