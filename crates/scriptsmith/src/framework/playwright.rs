//! Playwright test target.

use super::{escape_regex, indent_block, Element, Framework, Target};
use crate::action::AssertionKind;
use crate::config::ActionTemplates;
use crate::dsl::Subject;

const HEADER: &[&str] = &[
    "// Playwright script generated",
    "import { test, expect } from '@playwright/test';",
    "test('automation', async ({ page }) => {",
];

const FOOTER: &[&str] = &["});"];

/// Playwright: locator expressions, `expect` assertions
#[derive(Debug, Clone, Copy, Default)]
pub struct Playwright;

impl Playwright {
    /// Awaited read of the subject through the locator
    fn read(el: &Element<'_>, subject: &Subject) -> String {
        match subject {
            Subject::Text => format!("await {}.textContent()", el.locator),
            Subject::Value => format!("await {}.inputValue()", el.locator),
            Subject::Attribute(name) => {
                format!("(await {}.getAttribute(\"{name}\"))", el.locator)
            }
        }
    }
}

impl Target for Playwright {
    fn framework(&self) -> Framework {
        Framework::Playwright
    }

    fn header(&self) -> &'static [&'static str] {
        HEADER
    }

    fn footer(&self) -> &'static [&'static str] {
        FOOTER
    }

    fn default_templates(&self) -> ActionTemplates {
        ActionTemplates::new("await {locator}.click();", r#"await {locator}.fill("{value}");"#)
            .with_assert(AssertionKind::Exists, "await expect({locator}).toBeVisible();")
            .with_assert(
                AssertionKind::HasText,
                r#"await expect({locator}).toHaveText("{value}");"#,
            )
            .with_assert(
                AssertionKind::ValueIs,
                r#"await expect({locator}).toHaveValue("{value}");"#,
            )
    }

    fn not_contains(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "expect({}).not.toContain(\"{value}\");",
            Self::read(el, subject)
        ))
    }

    fn starts_with(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "expect({}).toMatch(/^{}/);",
            Self::read(el, subject),
            escape_regex(value)
        ))
    }

    fn ends_with(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "expect({}).toMatch(/{}$/);",
            Self::read(el, subject),
            escape_regex(value)
        ))
    }

    fn nth_child(&self, el: &Element<'_>, n: u32) -> Option<String> {
        Some(format!(
            "await expect(page.locator('{}:nth-child({n})')).toBeVisible();",
            el.selector
        ))
    }

    fn conditional(&self, condition: &str, action: &str) -> Option<String> {
        Some(format!("if ({condition}) {{\n{}\n}}", indent_block(action)))
    }

    fn wait(&self, el: &Element<'_>, timeout_ms: u64, what: &str) -> Option<String> {
        Some(format!(
            "await {}.waitFor({{ timeout: {timeout_ms} }}); // waiting for {what}",
            el.locator
        ))
    }

    fn retry_until(&self, condition: Option<&str>, raw: &str) -> Option<String> {
        Some(format!(
            "// Retry logic: while (!(await ({}))) {{ /* retry */ }}",
            condition.unwrap_or(raw)
        ))
    }

    fn report(&self, message: &str, condition: Option<&str>) -> Option<String> {
        Some(match condition {
            Some(cond) => format!("if ({cond}) {{ console.log('{message}'); }}"),
            None => format!("console.log('{message}');"),
        })
    }

    fn on_failure(&self, handler: &str) -> Option<String> {
        Some(format!(
            "try {{\n  // assertion\n}} catch (e) {{\n{}\n}}",
            indent_block(handler)
        ))
    }
}
