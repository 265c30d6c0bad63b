//! Scriptsmith: compile recorded browser interactions into automation scripts
//!
//! A page recorder captures clicks and text entry; a reviewer picks actions
//! and attaches assertions, optionally phrased in plain English. Scriptsmith
//! turns the result into source for Playwright, Cypress, Selenium, or plain
//! DOM scripting.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    SCRIPTSMITH Pipeline                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ RawConfig  │───►│ Config     │───►│ Locator +  │            │
//! │   │ (json/yaml)│    │ normalize  │    │ Template   │──┐         │
//! │   └────────────┘    └────────────┘    └────────────┘  │         │
//! │   ┌────────────┐    ┌────────────┐                    ▼         │
//! │   │ Recording  │───►│ Review     │───► ScriptGenerator ──► text │
//! │   └────────────┘    └────────────┘          │                   │
//! │                                   ┌─────────▼──────────┐        │
//! │                                   │ dsl: recognizers   │        │
//! │                                   │ ─► Clause ─► Target│        │
//! │                                   └────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use scriptsmith::{generate, Action, Framework, RawConfig};
//!
//! let actions = vec![
//!     Action::input("#email", "a@b.c"),
//!     Action::click("#submit").with_instruction("text does not contain 'error'"),
//! ];
//! let config = RawConfig::for_framework(Framework::Cypress);
//! let script = generate(&actions, Some(&config));
//!
//! assert_eq!(
//!     script,
//!     "// Cypress script generated\n\
//!      \x20 cy.get(\"#email\").type(\"a@b.c\");\n\
//!      \x20 cy.get('#submit').invoke('text').should('not.contain', \"error\");"
//! );
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod action;
mod config;
/// Natural-language assertion instructions
pub mod dsl;
mod export;
/// Automation targets and their code shapes
pub mod framework;
mod generator;
mod locator;
mod result;
mod review;
mod template;

pub use action::{
    Action, ActionKind, AssertionKind, AssertionRequest, Interaction, Recording,
};
pub use config::{ActionTemplates, Config, RawConfig, RawTemplates};
pub use dsl::{compile, AssertionCompiler, Clause, Predicate, Subject, MAX_DEPTH};
pub use export::{write_script, DEFAULT_SCRIPT_NAME};
pub use framework::{escape_regex, Element, Framework, Target};
pub use generator::{
    generate, generate_fallback, ScriptGenerator, ASSERTION_UNSUPPORTED,
    INSTRUCTION_ECHO_PREFIX, NO_ACTIONS_PLACEHOLDER,
};
pub use locator::{query_selector, resolve_locator};
pub use result::{ScriptError, ScriptResult};
pub use review::{AssertionEdit, Review};
pub use template::{
    action_template, assertion_template, render, DEFAULT_CLICK_TEMPLATE, DEFAULT_INPUT_TEMPLATE,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::action::*;
    pub use super::config::*;
    pub use super::dsl::{compile, AssertionCompiler, Clause, Predicate, Subject, MAX_DEPTH};
    pub use super::export::*;
    pub use super::framework::{Element, Framework, Target};
    pub use super::generator::*;
    pub use super::locator::*;
    pub use super::result::*;
    pub use super::review::*;
    pub use super::template::*;
}
