//! Natural-language assertion instructions.
//!
//! An instruction such as
//! `value does not contain 'foo' and report 'bar' if text starts with 'baz'`
//! is parsed by an ordered cascade of phrase recognizers into a [`Clause`]
//! tree, which is then rendered through the selected framework's
//! [`Target`](crate::framework::Target).
//!
//! Parsing is shallow: anything no recognizer claims yields
//! `None`, and callers fall back to a templated assertion.

mod clause;
mod compiler;
mod recognizer;

pub use clause::{Clause, Predicate, Subject};
pub use compiler::{compile, AssertionCompiler, ALTERNATIVES_HEADER, MAX_DEPTH};
pub use recognizer::{parse, pattern_order};
