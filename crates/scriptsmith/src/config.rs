//! Generation configuration.
//!
//! Users supply a [`RawConfig`] (usually a JSON or YAML file) that may omit
//! anything. [`Config::normalize`] resolves the framework and overlays the
//! user's templates on the framework's built-in table, key by key, so every
//! action kind and every assertion kind ends up with a non-empty template.
//!
//! ```yaml
//! framework: playwright
//! locatorMap:
//!   "#login": page.getByRole('button', { name: 'Log in' })
//! actions:
//!   input: await {locator}.type("{value}");
//!   assert:
//!     has text: await expect({locator}).toContainText("{value}");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::action::{ActionKind, AssertionKind};
use crate::framework::Framework;
use crate::result::{ScriptError, ScriptResult};

/// Template strings with `{locator}`, `{selector}` and `{value}` placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTemplates {
    /// Click template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click: Option<String>,
    /// Input template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Assertion templates by kind
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub assert: BTreeMap<AssertionKind, String>,
}

impl ActionTemplates {
    /// Create a table with action templates and no assertions
    #[must_use]
    pub fn new(click: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            click: Some(click.into()),
            input: Some(input.into()),
            assert: BTreeMap::new(),
        }
    }

    /// Add or replace an assertion template
    #[must_use]
    pub fn with_assert(mut self, kind: AssertionKind, template: impl Into<String>) -> Self {
        self.assert.insert(kind, template.into());
        self
    }

    /// Template for an action kind, if set
    #[must_use]
    pub fn action(&self, kind: ActionKind) -> Option<&str> {
        match kind {
            ActionKind::Click => self.click.as_deref(),
            ActionKind::Input => self.input.as_deref(),
        }
    }

    /// Template for an assertion kind, if set
    #[must_use]
    pub fn get(&self, kind: AssertionKind) -> Option<&str> {
        self.assert.get(&kind).map(String::as_str)
    }

    /// Overlay user templates; blank entries and unknown assertion keys are ignored
    pub fn overlay(&mut self, user: &RawTemplates) {
        if let Some(click) = non_blank(user.click.as_deref()) {
            self.click = Some(click.to_string());
        }
        if let Some(input) = non_blank(user.input.as_deref()) {
            self.input = Some(input.to_string());
        }
        for (key, template) in &user.assert {
            let Some(kind) = AssertionKind::from_key(key) else {
                debug!(key = key.as_str(), "ignoring unknown assertion template key");
                continue;
            };
            if let Some(template) = non_blank(Some(template)) {
                self.assert.insert(kind, template.to_string());
            }
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// User-supplied templates, keyed as typed in the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTemplates {
    /// Click template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click: Option<String>,
    /// Input template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Assertion templates by key (`exists`, `has text`, `value is`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub assert: BTreeMap<String, String>,
}

/// Configuration as supplied by the user, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfig {
    /// Framework name; unknown names become `plain`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    /// Selector to locator expression
    #[serde(default, rename = "locatorMap", skip_serializing_if = "BTreeMap::is_empty")]
    pub locator_map: BTreeMap<String, String>,
    /// Template overrides
    #[serde(default, alias = "actionTemplates")]
    pub actions: RawTemplates,
}

impl RawConfig {
    /// Configuration selecting only a framework
    #[must_use]
    pub fn for_framework(framework: Framework) -> Self {
        Self {
            framework: Some(framework.name().to_string()),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration
    pub fn from_json_str(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a YAML configuration
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> ScriptResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a configuration file.
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it is
    /// YAML and the `yaml` feature is disabled.
    pub fn load(path: impl AsRef<Path>) -> ScriptResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let parsed = match extension.as_str() {
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&text),
            #[cfg(not(feature = "yaml"))]
            "yaml" | "yml" => {
                return Err(ScriptError::UnsupportedFormat {
                    extension: extension.clone(),
                })
            }
            _ => Self::from_json_str(&text),
        };
        parsed.map_err(|e| ScriptError::invalid_input("config", path, e.to_string()))
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Target framework
    pub framework: Framework,
    /// Selector to locator expression
    #[serde(rename = "locatorMap")]
    pub locator_map: BTreeMap<String, String>,
    /// Complete template table
    #[serde(rename = "actions")]
    pub templates: ActionTemplates,
}

impl Config {
    /// Built-in configuration for a framework
    #[must_use]
    pub fn defaults(framework: Framework) -> Self {
        Self {
            framework,
            locator_map: BTreeMap::new(),
            templates: framework.target().default_templates(),
        }
    }

    /// Resolve a possibly absent user configuration. Never fails.
    #[must_use]
    pub fn normalize(raw: Option<&RawConfig>) -> Self {
        let Some(raw) = raw else {
            return Self::defaults(Framework::Plain);
        };
        let mut config = Self::defaults(Framework::from_name(raw.framework.as_deref()));
        config.locator_map.clone_from(&raw.locator_map);
        config.templates.overlay(&raw.actions);
        debug!(
            framework = %config.framework,
            locators = config.locator_map.len(),
            "configuration normalized"
        );
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults(Framework::Plain)
    }
}

impl From<&RawConfig> for Config {
    fn from(raw: &RawConfig) -> Self {
        Self::normalize(Some(raw))
    }
}
