//! Cypress spec target.

use super::{escape_regex, Element, Framework, Target};
use crate::action::AssertionKind;
use crate::config::ActionTemplates;
use crate::dsl::Subject;

const HEADER: &[&str] = &["// Cypress script generated"];

/// Cypress: chained `cy.get(...)` commands re-resolved per call
#[derive(Debug, Clone, Copy, Default)]
pub struct Cypress;

impl Cypress {
    /// `cy.get(...).invoke(...)` prefix for the subject
    fn invoke(el: &Element<'_>, subject: &Subject) -> String {
        let args = match subject {
            Subject::Text => "'text'".to_string(),
            Subject::Value => "'val'".to_string(),
            Subject::Attribute(name) => format!("'attr', '{name}'"),
        };
        format!("cy.get('{}').invoke({args})", el.selector)
    }
}

impl Target for Cypress {
    fn framework(&self) -> Framework {
        Framework::Cypress
    }

    fn header(&self) -> &'static [&'static str] {
        HEADER
    }

    fn default_templates(&self) -> ActionTemplates {
        ActionTemplates::new(
            r#"cy.get("{selector}").click();"#,
            r#"cy.get("{selector}").type("{value}");"#,
        )
        .with_assert(AssertionKind::Exists, r#"cy.get("{selector}").should("exist");"#)
        .with_assert(
            AssertionKind::HasText,
            r#"cy.get("{selector}").should("have.text", "{value}");"#,
        )
        .with_assert(
            AssertionKind::ValueIs,
            r#"cy.get("{selector}").should("have.value", "{value}");"#,
        )
    }

    fn not_contains(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "{}.should('not.contain', \"{value}\");",
            Self::invoke(el, subject)
        ))
    }

    fn starts_with(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "{}.should('match', /^{}/);",
            Self::invoke(el, subject),
            escape_regex(value)
        ))
    }

    fn ends_with(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "{}.should('match', /{}$/);",
            Self::invoke(el, subject),
            escape_regex(value)
        ))
    }

    fn nth_child(&self, el: &Element<'_>, n: u32) -> Option<String> {
        Some(format!(
            "cy.get('{}:nth-child({n})').should('exist');",
            el.selector
        ))
    }

    fn conditional(&self, condition: &str, action: &str) -> Option<String> {
        Some(format!(
            "cy.then(() => {{ if ({condition}) {{ {action} }} }});"
        ))
    }

    fn wait(&self, el: &Element<'_>, timeout_ms: u64, what: &str) -> Option<String> {
        Some(format!(
            "cy.get('{}', {{ timeout: {timeout_ms} }}); // waiting for {what}",
            el.selector
        ))
    }

    fn retry_until(&self, _condition: Option<&str>, raw: &str) -> Option<String> {
        Some(format!(
            "// Retry logic: use cy.retry-until plugin or custom loop for: {raw}"
        ))
    }

    fn report(&self, message: &str, condition: Option<&str>) -> Option<String> {
        Some(match condition {
            Some(cond) => format!("if ({cond}) {{ cy.log('{message}'); }}"),
            None => format!("cy.log('{message}');"),
        })
    }

    fn on_failure(&self, handler: &str) -> Option<String> {
        Some(format!(
            "Cypress.on('fail', (e) => {{ {handler}; throw e; }});"
        ))
    }
}
