//! selenium-webdriver target.

use super::{indent_block, Element, Framework, Target};
use crate::action::AssertionKind;
use crate::config::ActionTemplates;
use crate::dsl::Subject;

const HEADER: &[&str] = &[
    "// Selenium script generated",
    r#"const {Builder, By, until} = require("selenium-webdriver");"#,
    r#"let driver = new Builder().forBrowser("chrome").build();"#,
    "(async function run() {",
];

const FOOTER: &[&str] = &["})();"];

/// Selenium: `driver.findElement(By.cssSelector(...))` per call
#[derive(Debug, Clone, Copy, Default)]
pub struct Selenium;

impl Selenium {
    fn read(el: &Element<'_>, subject: &Subject) -> String {
        let element = format!("driver.findElement(By.cssSelector('{}'))", el.selector);
        match subject {
            Subject::Text => format!("{element}.getText()"),
            Subject::Value => format!("{element}.getAttribute('value')"),
            Subject::Attribute(name) => format!("{element}.getAttribute('{name}')"),
        }
    }
}

impl Target for Selenium {
    fn framework(&self) -> Framework {
        Framework::Selenium
    }

    fn header(&self) -> &'static [&'static str] {
        HEADER
    }

    fn footer(&self) -> &'static [&'static str] {
        FOOTER
    }

    fn default_templates(&self) -> ActionTemplates {
        ActionTemplates::new(
            r#"driver.findElement(By.cssSelector("{selector}")).click();"#,
            r#"driver.findElement(By.cssSelector("{selector}")).sendKeys("{value}");"#,
        )
        .with_assert(
            AssertionKind::Exists,
            r#"assert(driver.findElement(By.cssSelector("{selector}")).isDisplayed());"#,
        )
        .with_assert(
            AssertionKind::HasText,
            r#"assert(driver.findElement(By.cssSelector("{selector}")).getText() === "{value}");"#,
        )
        .with_assert(
            AssertionKind::ValueIs,
            r#"assert(driver.findElement(By.cssSelector("{selector}")).getAttribute("value") === "{value}");"#,
        )
    }

    fn not_contains(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "assert(!{}.includes(\"{value}\"));",
            Self::read(el, subject)
        ))
    }

    fn starts_with(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "assert({}.startsWith(\"{value}\"));",
            Self::read(el, subject)
        ))
    }

    fn ends_with(&self, el: &Element<'_>, subject: &Subject, value: &str) -> Option<String> {
        Some(format!(
            "assert({}.endsWith(\"{value}\"));",
            Self::read(el, subject)
        ))
    }

    fn nth_child(&self, el: &Element<'_>, n: u32) -> Option<String> {
        Some(format!(
            "assert(driver.findElements(By.cssSelector('{}:nth-child({n})')).length > 0);",
            el.selector
        ))
    }

    fn conditional(&self, condition: &str, action: &str) -> Option<String> {
        Some(format!("if ({condition}) {{\n{}\n}}", indent_block(action)))
    }

    fn wait(&self, el: &Element<'_>, timeout_ms: u64, what: &str) -> Option<String> {
        Some(format!(
            "await driver.wait(until.elementLocated(By.cssSelector('{}')), {timeout_ms}); // waiting for {what}",
            el.selector
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
