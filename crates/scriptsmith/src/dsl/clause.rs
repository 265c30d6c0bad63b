//! Parsed form of an assertion instruction.
//!
//! Recognizers produce a [`Clause`] tree without knowing the target
//! framework; the compiler renders the tree through a [`Target`].
//!
//! [`Target`]: crate::framework::Target

use std::fmt;

/// What a predicate reads from the element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    /// Text content
    Text,
    /// Input value
    Value,
    /// Named attribute
    Attribute(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Value => f.write_str("value"),
            Self::Attribute(name) => write!(f, "attribute {name}"),
        }
    }
}

/// Leaf checks against the element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `SUBJECT does not contain 'VALUE'`
    NotContains {
        /// What is read
        subject: Subject,
        /// Literal that must be absent
        value: String,
    },
    /// `SUBJECT starts with 'VALUE'`
    StartsWith {
        /// What is read
        subject: Subject,
        /// Expected prefix
        value: String,
    },
    /// `SUBJECT ends with 'VALUE'`
    EndsWith {
        /// What is read
        subject: Subject,
        /// Expected suffix
        value: String,
    },
    /// `is the Nth child`
    NthChild(u32),
}

/// A parsed instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// A single check
    Predicate(Predicate),
    /// `A and B and ...`; every part must hold
    Conjunction(Vec<Clause>),
    /// `A or B or ...`; documented as alternatives, never enforced
    Disjunction(Vec<Clause>),
    /// `if CONDITION[,] then ACTION`
    Conditional {
        /// Guard
        condition: Box<Clause>,
        /// Parsed action, when the action text is itself an instruction
        action: Option<Box<Clause>>,
        /// Action text as written, injected when it does not parse
        action_raw: String,
    },
    /// `wait [up to|for] N unit for WHAT`
    Wait {
        /// Timeout in milliseconds
        timeout_ms: u64,
        /// What is being waited for
        what: String,
    },
    /// `retry until CONDITION`
    RetryUntil {
        /// Parsed condition, if it was understood
        condition: Option<Box<Clause>>,
        /// Condition text as written
        raw: String,
    },
    /// `report 'MESSAGE' [if CONDITION]`
    Report {
        /// Message to log
        message: String,
        /// Optional guard
        condition: Option<Box<Clause>>,
    },
    /// `on failure[,] HANDLER`
    OnFailure {
        /// Code injected verbatim on the failure path
        handler: String,
    },
}

impl Clause {
    /// Short name of the clause kind, for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Predicate(_) => "predicate",
            Self::Conjunction(_) => "conjunction",
            Self::Disjunction(_) => "disjunction",
            Self::Conditional { .. } => "conditional",
            Self::Wait { .. } => "wait",
            Self::RetryUntil { .. } => "retry-until",
            Self::Report { .. } => "report",
            Self::OnFailure { .. } => "on-failure",
        }
    }

    /// Whether the clause renders to checks usable as a boolean expression:
    /// a predicate, or a conjunction of predicates
    #[must_use]
    pub fn is_check(&self) -> bool {
        match self {
            Self::Predicate(_) => true,
            Self::Conjunction(parts) => {
                !parts.is_empty() && parts.iter().all(|p| matches!(p, Self::Predicate(_)))
            }
            _ => false,
        }
    }

    /// Nesting depth of the tree (a leaf is 1)
    #[must_use]
    pub fn depth(&self) -> usize {
        let child = match self {
            Self::Predicate(_) | Self::Wait { .. } | Self::OnFailure { .. } => 0,
            Self::Conjunction(parts) | Self::Disjunction(parts) => {
                parts.iter().map(Self::depth).max().unwrap_or(0)
            }
            Self::Conditional {
                condition, action, ..
            } => condition
                .depth()
                .max(action.as_deref().map_or(0, Self::depth)),
            Self::RetryUntil { condition, .. } | Self::Report { condition, .. } => {
                condition.as_deref().map_or(0, Self::depth)
            }
        };
        child + 1
    }
}
