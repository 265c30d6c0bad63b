//! Automation targets.
//!
//! Each supported framework implements [`Target`], which has one method per
//! construct the generator can emit. `plain` is the null object: it owns a
//! template table but renders no DSL construct, so every instruction compiled
//! for it falls back to its templated assertion.
//!
//! ```text
//!   Framework ──► &'static dyn Target ──► header / footer
//!                                     ├─► default templates
//!                                     └─► predicates, wait, report, ...
//! ```

mod cypress;
mod plain;
mod playwright;
mod selenium;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ActionTemplates;
use crate::dsl::Subject;

pub use cypress::Cypress;
pub use plain::Plain;
pub use playwright::Playwright;
pub use selenium::Selenium;

/// Automation framework selected by the configuration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Literal DOM scripting, no test framework
    #[default]
    Plain,
    /// Playwright test
    Playwright,
    /// Cypress spec
    Cypress,
    /// selenium-webdriver script
    Selenium,
}

impl Framework {
    /// All supported frameworks
    pub const ALL: [Self; 4] = [Self::Plain, Self::Playwright, Self::Cypress, Self::Selenium];

    /// Configuration name of the framework
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Playwright => "playwright",
            Self::Cypress => "cypress",
            Self::Selenium => "selenium",
        }
    }

    /// Resolve a configured name. Missing or unknown names become `plain`.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(raw) = name else {
            return Self::Plain;
        };
        let wanted = raw.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|fw| fw.name() == wanted)
            .unwrap_or_else(|| {
                tracing::debug!(framework = raw, "unknown framework, using plain");
                Self::Plain
            })
    }

    /// Whether elements are addressed by raw selector on every call
    #[must_use]
    pub const fn uses_raw_selectors(self) -> bool {
        matches!(self, Self::Cypress | Self::Selenium)
    }

    /// Code-emitting target for this framework
    #[must_use]
    pub fn target(self) -> &'static dyn Target {
        match self {
            Self::Plain => &Plain,
            Self::Playwright => &Playwright,
            Self::Cypress => &Cypress,
            Self::Selenium => &Selenium,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Framework {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(Some(s)))
    }
}

/// The element an instruction talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    /// Raw recorded selector
    pub selector: &'a str,
    /// Resolved locator expression (equals `selector` for raw-selector frameworks)
    pub locator: &'a str,
}

impl<'a> Element<'a> {
    /// Create an element reference
    #[must_use]
    pub const fn new(selector: &'a str, locator: &'a str) -> Self {
        Self { selector, locator }
    }
}

/// Per-framework code shapes.
///
/// Construct methods return `None` when the framework has no rendering for
/// the construct; the compiler then reports the instruction as not understood.
pub trait Target: fmt::Debug + Send + Sync {
    /// Framework this target renders for
    fn framework(&self) -> Framework;

    /// Lines emitted before the first action
    fn header(&self) -> &'static [&'static str] {
        &[]
    }

    /// Lines emitted after the last action
    fn footer(&self) -> &'static [&'static str] {
        &[]
    }

    /// Built-in template table
    fn default_templates(&self) -> ActionTemplates;

    /// `SUBJECT does not contain 'VALUE'`
    fn not_contains(&self, _el: &Element<'_>, _subject: &Subject, _value: &str) -> Option<String> {
        None
    }

    /// `SUBJECT starts with 'VALUE'`; `value` is unescaped
    fn starts_with(&self, _el: &Element<'_>, _subject: &Subject, _value: &str) -> Option<String> {
        None
    }

    /// `SUBJECT ends with 'VALUE'`; `value` is unescaped
    fn ends_with(&self, _el: &Element<'_>, _subject: &Subject, _value: &str) -> Option<String> {
        None
    }

    /// `is the Nth child`
    fn nth_child(&self, _el: &Element<'_>, _n: u32) -> Option<String> {
        None
    }

    /// `if CONDITION then ACTION`; `condition` is already an expression
    fn conditional(&self, _condition: &str, _action: &str) -> Option<String> {
        None
    }

    /// `wait N units for WHAT`
    fn wait(&self, _el: &Element<'_>, _timeout_ms: u64, _what: &str) -> Option<String> {
        None
    }

    /// `retry until CONDITION`; `condition` is `None` when it did not compile
    fn retry_until(&self, _condition: Option<&str>, _raw: &str) -> Option<String> {
        None
    }

    /// `report 'MESSAGE' [if CONDITION]`
    fn report(&self, _message: &str, _condition: Option<&str>) -> Option<String> {
        None
    }

    /// `on failure, HANDLER`; `handler` is injected verbatim
    fn on_failure(&self, _handler: &str) -> Option<String> {
        None
    }
}

/// Escape regex metacharacters so `value` matches literally inside `/.../`
#[must_use]
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\' | '/'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Indent every line of `code` by two spaces
pub(crate) fn indent_block(code: &str) -> String {
    code.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
