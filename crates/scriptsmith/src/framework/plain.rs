//! Literal DOM scripting.

use super::{Framework, Target};
use crate::action::AssertionKind;
use crate::config::ActionTemplates;

const NO_ASSERTION: &str = "// No assertion syntax in plain JS";

/// Null-object target: templates only, no DSL constructs
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Target for Plain {
    fn framework(&self) -> Framework {
        Framework::Plain
    }

    fn default_templates(&self) -> ActionTemplates {
        ActionTemplates::new("{locator}.click();", r#"{locator}.value = "{value}";"#)
            .with_assert(AssertionKind::Exists, NO_ASSERTION)
            .with_assert(AssertionKind::HasText, NO_ASSERTION)
            .with_assert(AssertionKind::ValueIs, NO_ASSERTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::Subject;
    use crate::framework::Element;

    #[test]
    fn test_no_boilerplate() {
        assert!(Plain.header().is_empty());
        assert!(Plain.footer().is_empty());
    }

    #[test]
    fn test_constructs_render_nothing() {
        let el = Element::new("#a", r##"document.querySelector("#a")"##);
        assert!(Plain.not_contains(&el, &Subject::Text, "x").is_none());
        assert!(Plain.starts_with(&el, &Subject::Value, "x").is_none());
        assert!(Plain.nth_child(&el, 2).is_none());
        assert!(Plain.wait(&el, 1000, "it").is_none());
        assert!(Plain.report("hi", None).is_none());
        assert!(Plain.on_failure("log()").is_none());
    }

    #[test]
    fn test_default_templates_complete() {
        let t = Plain.default_templates();
        assert_eq!(t.click.as_deref(), Some("{locator}.click();"));
        assert_eq!(t.assert.len(), 3);
    }
}
