//! Locator resolution.
//!
//! Cypress and Selenium look elements up by raw selector on every call, so
//! the selector passes through untouched. Other targets hold a locator
//! expression: the user's `locatorMap` entry when there is one, otherwise a
//! literal `document.querySelector(...)` lookup.

use std::collections::BTreeMap;

use crate::framework::Framework;

/// Literal lookup expression for a selector
#[must_use]
pub fn query_selector(selector: &str) -> String {
    format!("document.querySelector(\"{}\")", escape_js_string(selector))
}

/// Escape `value` for a double-quoted JavaScript string literal.
///
/// Only ES5 escapes are emitted: control characters become `\xNN`, and the
/// line and paragraph separators become `\u2028` / `\u2029`.
fn escape_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() && u32::from(c) < 0x100 => {
                out.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out
}

/// Resolve the element reference used by templates and DSL output.
///
/// Total: an unmapped selector degrades to [`query_selector`].
#[must_use]
pub fn resolve_locator(
    selector: &str,
    locator_map: &BTreeMap<String, String>,
    framework: Framework,
) -> String {
    if framework.uses_raw_selectors() {
        return selector.to_string();
    }
    locator_map
        .get(selector)
        .cloned()
        .unwrap_or_else(|| query_selector(selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("#go".to_string(), "page.getByRole('button')".to_string());
        map
    }

    #[test]
    fn test_query_selector() {
        assert_eq!(query_selector("#go"), r##"document.querySelector("#go")"##);
        assert_eq!(
            query_selector(r#"a[title="x"]"#),
            r#"document.querySelector("a[title=\"x\"]")"#
        );
    }

    #[test]
    fn test_query_selector_uses_es5_escapes() {
        assert_eq!(
            query_selector("a[title=\"x\\y\"]"),
            r#"document.querySelector("a[title=\"x\\y\"]")"#
        );
        assert_eq!(
            query_selector("#a\u{7}b\nc\u{2028}"),
            r##"document.querySelector("#a\x07b\nc\u2028")"##
        );
        assert_eq!(query_selector("#caf\u{e9}"), "document.querySelector(\"#caf\u{e9}\")");
        assert!(!query_selector("\u{1}").contains("\\u{"));
    }

    #[test]
    fn test_raw_selector_frameworks_ignore_map() {
        for fw in [Framework::Cypress, Framework::Selenium] {
            assert_eq!(resolve_locator("#go", &map(), fw), "#go");
        }
    }

    #[test]
    fn test_mapped_selector() {
        assert_eq!(
            resolve_locator("#go", &map(), Framework::Playwright),
            "page.getByRole('button')"
        );
    }

    #[test]
    fn test_unmapped_selector_falls_back() {
        assert_eq!(
            resolve_locator(".other", &map(), Framework::Plain),
            r#"document.querySelector(".other")"#
        );
    }
}
