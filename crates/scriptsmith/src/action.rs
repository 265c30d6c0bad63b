//! Recorded actions as produced by the page-interaction recorder.
//!
//! The wire format follows the recorder's storage document:
//!
//! ```json
//! { "type": "input", "tag": "INPUT", "selector": "#email",
//!   "value": "a@b.c", "timestamp": 1718000000000,
//!   "assert": true, "assertType": "value is",
//!   "assertInstruction": "value ends with '.c'" }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::result::{ScriptError, ScriptResult};

/// Kind of a recorded interaction, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Mouse click
    Click,
    /// Text entry
    Input,
}

impl ActionKind {
    /// Template key for this kind
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recorded interaction with its payload.
///
/// Only `Input` carries a value, so a click with a value cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Interaction {
    /// Mouse click
    Click,
    /// Text entry
    Input {
        /// Text entered by the user
        #[serde(default)]
        value: String,
    },
}

impl Interaction {
    /// Kind of this interaction
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Click => ActionKind::Click,
            Self::Input { .. } => ActionKind::Input,
        }
    }

    /// Entered value, present only for `Input`
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Click => None,
            Self::Input { value } => Some(value),
        }
    }
}

/// Assertion flavour requested for an action
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum AssertionKind {
    /// Element is present
    #[default]
    #[serde(rename = "exists")]
    Exists,
    /// Element text equals the recorded value
    #[serde(rename = "has text", alias = "has-text", alias = "has_text")]
    HasText,
    /// Input value equals the recorded value
    #[serde(rename = "value is", alias = "value-is", alias = "value_is")]
    ValueIs,
}

impl AssertionKind {
    /// Every assertion kind, in template-table order
    pub const ALL: [Self; 3] = [Self::Exists, Self::HasText, Self::ValueIs];

    /// Template key for this kind
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::HasText => "has text",
            Self::ValueIs => "value is",
        }
    }

    /// Parse a template key; spaces, hyphens and underscores are interchangeable
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL.into_iter().find(|kind| kind.key() == normalized)
    }
}

impl fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An assertion attached to an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionRequest {
    /// Templated assertion to emit
    pub kind: AssertionKind,
    /// Free-form instruction that overrides the template when it compiles
    pub instruction: Option<String>,
}

/// One recorded user interaction, optionally augmented with an assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The interaction and its payload
    #[serde(flatten)]
    pub interaction: Interaction,
    /// Tag name of the element (diagnostic only)
    #[serde(default, alias = "elementTag")]
    pub tag: String,
    /// CSS-like selector for the element
    pub selector: String,
    /// Capture time in epoch milliseconds (informational)
    #[serde(default, alias = "capturedAt", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Whether the reviewer asked for an assertion
    #[serde(default, rename = "assert", alias = "assertionRequested")]
    pub assert: bool,
    /// Requested assertion kind, as typed by the reviewer
    #[serde(
        default,
        rename = "assertType",
        alias = "assertionKind",
        skip_serializing_if = "Option::is_none"
    )]
    pub assert_type: Option<String>,
    /// Natural-language assertion instruction
    #[serde(
        default,
        rename = "assertInstruction",
        alias = "assertionInstruction",
        skip_serializing_if = "Option::is_none"
    )]
    pub assert_instruction: Option<String>,
}

impl Action {
    fn with_interaction(interaction: Interaction, selector: impl Into<String>) -> Self {
        Self {
            interaction,
            tag: String::new(),
            selector: selector.into(),
            timestamp: None,
            assert: false,
            assert_type: None,
            assert_instruction: None,
        }
    }

    /// Create a click action
    #[must_use]
    pub fn click(selector: impl Into<String>) -> Self {
        Self::with_interaction(Interaction::Click, selector)
    }

    /// Create an input action
    #[must_use]
    pub fn input(selector: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_interaction(
            Interaction::Input {
                value: value.into(),
            },
            selector,
        )
    }

    /// Set the element tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Request an assertion of the given kind
    #[must_use]
    pub fn with_assertion(mut self, kind: AssertionKind) -> Self {
        self.assert = true;
        self.assert_type = Some(kind.key().to_string());
        self
    }

    /// Request an assertion driven by a natural-language instruction
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.assert = true;
        self.assert_instruction = Some(instruction.into());
        self
    }

    /// Kind of this action
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        self.interaction.kind()
    }

    /// Entered value, present only for input actions
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.interaction.value()
    }

    /// The assertion request, if one was made.
    ///
    /// Unknown assertion kinds resolve to `exists`; blank instructions are dropped.
    #[must_use]
    pub fn assertion(&self) -> Option<AssertionRequest> {
        if !self.assert {
            return None;
        }
        let kind = self
            .assert_type
            .as_deref()
            .and_then(AssertionKind::from_key)
            .unwrap_or_default();
        let instruction = self
            .assert_instruction
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);
        Some(AssertionRequest { kind, instruction })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordingDocument {
    Bare(Vec<Action>),
    Stored { actions: Vec<Action> },
}

/// An ordered list of recorded actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordingDocument")]
pub struct Recording {
    /// Actions in capture order
    pub actions: Vec<Action>,
}

impl From<RecordingDocument> for Recording {
    fn from(doc: RecordingDocument) -> Self {
        match doc {
            RecordingDocument::Bare(actions) | RecordingDocument::Stored { actions } => {
                Self { actions }
            }
        }
    }
}

impl Recording {
    /// Create a recording from actions
    #[must_use]
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Parse the recorder's JSON document (bare array or `{ "actions": [...] }`)
    pub fn from_json_str(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a recording from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ScriptResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
            .map_err(|e| ScriptError::invalid_input("actions", path, e.to_string()))
    }

    /// Number of actions
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
