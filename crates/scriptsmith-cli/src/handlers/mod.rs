//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains the execution logic for one subcommand
//! plus the pure helpers it is built from.

pub mod compile;
pub mod generate;
pub mod templates;

pub use compile::{compile_instruction, execute_compile};
pub use generate::{build_review, execute_generate, load_actions, render_script, Selection};
pub use templates::{execute_templates, resolve_templates};
