//! Reviewer edits over a recording.
//!
//! Before generation a reviewer picks which recorded actions to keep, may
//! hand-edit selectors, and may attach assertion requests. Indexes always
//! refer to positions in the original recording.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

use crate::action::{Action, AssertionKind};
use crate::result::{ScriptError, ScriptResult};

/// Assertion requested for one action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionEdit {
    /// Templated assertion kind
    #[serde(default, alias = "type", alias = "assertType")]
    pub kind: AssertionKind,
    /// Natural-language instruction
    #[serde(
        default,
        alias = "assertInstruction",
        skip_serializing_if = "Option::is_none"
    )]
    pub instruction: Option<String>,
}

impl AssertionEdit {
    /// Request an assertion of `kind`
    #[must_use]
    pub const fn new(kind: AssertionKind) -> Self {
        Self {
            kind,
            instruction: None,
        }
    }

    /// Attach an instruction
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }
}

/// A reviewer's edits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Kept action indexes; `None` keeps everything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<usize>>,
    /// Replacement selectors by index
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub selectors: BTreeMap<usize, String>,
    /// Assertion requests by index
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub assertions: BTreeMap<usize, AssertionEdit>,
}

impl Review {
    /// Review that keeps every action untouched
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only these indexes
    #[must_use]
    pub fn select(mut self, indexes: impl IntoIterator<Item = usize>) -> Self {
        self.include = Some(indexes.into_iter().collect());
        self
    }

    /// Replace the selector of one action
    #[must_use]
    pub fn with_selector(mut self, index: usize, selector: impl Into<String>) -> Self {
        self.selectors.insert(index, selector.into());
        self
    }

    /// Request an assertion on one action
    #[must_use]
    pub fn with_assertion(mut self, index: usize, edit: AssertionEdit) -> Self {
        self.assertions.insert(index, edit);
        self
    }

    /// Parse a JSON review document
    pub fn from_json_str(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a review from a JSON file
    pub fn load(path: impl AsRef<Path>) -> ScriptResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
            .map_err(|e| ScriptError::invalid_input("review", path, e.to_string()))
    }

    /// Indexes the review mentions that a recording of `len` actions lacks
    #[must_use]
    pub fn stale_indexes(&self, len: usize) -> BTreeSet<usize> {
        self.include
            .iter()
            .flatten()
            .chain(self.selectors.keys())
            .chain(self.assertions.keys())
            .copied()
            .filter(|&index| index >= len)
            .collect()
    }

    /// Apply the edits, returning the kept actions in recorded order.
    ///
    /// Indexes past the end of `actions` are ignored.
    #[must_use]
    pub fn apply(&self, actions: &[Action]) -> Vec<Action> {
        let len = actions.len();
        for index in self.stale_indexes(len) {
            debug!(index, actions = len, "ignoring review edit for missing action");
        }

        let kept: BTreeSet<usize> = match &self.include {
            Some(indexes) => indexes.iter().copied().filter(|&i| i < len).collect(),
            None => (0..len).collect(),
        };

        kept.into_iter()
            .map(|index| {
                let mut action = actions[index].clone();
                if let Some(selector) = self.selectors.get(&index) {
                    let selector = selector.trim();
                    if !selector.is_empty() {
                        action.selector = selector.to_string();
                    }
                }
                if let Some(edit) = self.assertions.get(&index) {
                    action.assert = true;
                    action.assert_type = Some(edit.kind.key().to_string());
                    action.assert_instruction.clone_from(&edit.instruction);
                }
                action
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recording() -> Vec<Action> {
        vec![
            Action::click("#a"),
            Action::input("#b", "x"),
            Action::click("#c"),
        ]
    }

    #[test]
    fn test_empty_review_is_identity() {
        assert_eq!(Review::new().apply(&recording()), recording());
    }

    #[test]
    fn test_select_keeps_recorded_order() {
        let kept = Review::new().select([2, 0, 2]).apply(&recording());
        let selectors: Vec<&str> = kept.iter().map(|a| a.selector.as_str()).collect();
        assert_eq!(selectors, vec!["#a", "#c"]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let kept = Review::new()
            .select([1, 7])
            .with_selector(9, "#nope")
            .with_assertion(5, AssertionEdit::default())
            .apply(&recording());
        assert_eq!(kept, vec![Action::input("#b", "x")]);
    }

    #[test]
    fn test_stale_indexes() {
        let review = Review::new()
            .select([0, 7])
            .with_selector(9, "#z")
            .with_assertion(7, AssertionEdit::new(AssertionKind::Exists));
        assert_eq!(
            review.stale_indexes(3).into_iter().collect::<Vec<_>>(),
            vec![7, 9]
        );
        assert!(Review::new().select([0, 2]).stale_indexes(3).is_empty());
    }

    #[test]
    fn test_selector_edit() {
        let kept = Review::new()
            .with_selector(0, " button.primary ")
            .with_selector(1, "   ")
            .apply(&recording());
        assert_eq!(kept[0].selector, "button.primary");
        assert_eq!(kept[1].selector, "#b");
    }

    #[test]
    fn test_assertion_edit() {
        let kept = Review::new()
            .with_assertion(
                1,
                AssertionEdit::new(AssertionKind::ValueIs).with_instruction("value ends with 'x'"),
            )
            .apply(&recording());
        let request = kept[1].assertion().unwrap();
        assert_eq!(request.kind, AssertionKind::ValueIs);
        assert_eq!(request.instruction.as_deref(), Some("value ends with 'x'"));
        assert!(kept[0].assertion().is_none());
    }

    #[test]
    fn test_json_document() {
        let review = Review::from_json_str(
            r##"{
                "include": [0, 2],
                "selectors": { "2": "#renamed" },
                "assertions": { "0": { "kind": "has-text", "instruction": "text ends with '!'" } }
            }"##,
        )
        .unwrap();
        let kept = review.apply(&recording());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].selector, "#renamed");
        assert_eq!(kept[0].assertion().unwrap().kind, AssertionKind::HasText);
    }
}
