//! End-to-end generation scenarios.
//!
//! Each test drives the public API the way the recorder's popup does:
//! recorded actions plus an optional configuration in, script text out.

#![allow(clippy::unwrap_used)]

use scriptsmith::prelude::*;
use std::collections::BTreeMap;
use std::io::Write;

const FRAMEWORKS_WITH_DSL: [Framework; 3] =
    [Framework::Playwright, Framework::Cypress, Framework::Selenium];

fn config(framework: Framework) -> RawConfig {
    RawConfig::for_framework(framework)
}

mod placeholder {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_actions_yield_placeholder_everywhere() {
        assert_eq!(generate(&[], None), NO_ACTIONS_PLACEHOLDER);
        for fw in Framework::ALL {
            assert_eq!(generate(&[], Some(&config(fw))), NO_ACTIONS_PLACEHOLDER);
        }
    }
}

mod fallback {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn click_without_config_is_direct_click() {
        let script = generate(&[Action::click("#s")], None);
        assert_eq!(script, r##"document.querySelector("#s").click();"##);
        assert!(!script.contains(".value ="));
    }

    #[test]
    fn input_without_config_assigns_value() {
        let script = generate(&[Action::input("#s", "Hello World")], None);
        assert_eq!(
            script,
            r##"document.querySelector("#s").value = "Hello World";"##
        );
    }
}

mod playwright {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn go_button_scenario() {
        let script = generate(&[Action::click("#go")], Some(&config(Framework::Playwright)));
        assert_eq!(
            script,
            [
                "// Playwright script generated",
                "import { test, expect } from '@playwright/test';",
                "test('automation', async ({ page }) => {",
                r##"  await document.querySelector("#go").click();"##,
                "});",
            ]
            .join("\n")
        );
    }

    #[test]
    fn locator_map_is_used() {
        let mut raw = config(Framework::Playwright);
        raw.locator_map
            .insert("#go".into(), "page.getByRole('button', { name: 'Go' })".into());
        let script = generate(&[Action::input("#go", "x")], Some(&raw));
        assert!(script.contains(r#"  await page.getByRole('button', { name: 'Go' }).fill("x");"#));
    }

    #[test]
    fn headline_instruction() {
        let action = Action::input("#q", "zzz")
            .with_instruction("value does not contain 'foo' and report 'bar' if text starts with 'baz'");
        let script = generate(&[action], Some(&config(Framework::Playwright)));
        let body: Vec<&str> = script.lines().skip(3).collect();
        assert_eq!(
            body,
            vec![
                r##"  expect(await document.querySelector("#q").inputValue()).not.toContain("foo");"##,
                r##"  if (expect(await document.querySelector("#q").textContent()).toMatch(/^baz/)) { console.log('bar'); }"##,
                "});",
            ]
        );
    }
}

mod dsl {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn conjunction_round_trip() {
        for fw in FRAMEWORKS_WITH_DSL {
            let locator = resolve_locator("#t", &BTreeMap::new(), fw);
            let both = compile("text starts with 'a' and text ends with 'b'", fw, "#t", &locator);
            let first = compile("text starts with 'a'", fw, "#t", &locator).unwrap();
            let second = compile("text ends with 'b'", fw, "#t", &locator).unwrap();
            assert_eq!(both, Some(format!("{first}\n{second}")), "{fw}");
        }
    }

    #[test]
    fn disjunction_is_comment_only() {
        for fw in FRAMEWORKS_WITH_DSL {
            let code = compile("value starts with 'a' or value ends with 'b'", fw, "#t", "#t").unwrap();
            assert!(
                code.lines().all(|line| line.trim_start().starts_with("//")),
                "{fw}: {code}"
            );
        }
    }

    #[test]
    fn natural_phrasing_compiles() {
        for instruction in [
            "button text does not contain 'error'",
            "the input value starts with 'abc'",
            "please wait 5 seconds for spinner",
        ] {
            for fw in FRAMEWORKS_WITH_DSL {
                assert!(compile(instruction, fw, "#t", "#t").is_some(), "{fw}: {instruction}");
            }
        }
        assert_eq!(
            compile("button text does not contain 'error'", Framework::Cypress, "#t", "#t"),
            compile("text does not contain 'error'", Framework::Cypress, "#t", "#t")
        );
    }

    #[test]
    fn statements_never_become_conditions() {
        let action = Action::click("#t")
            .with_assertion(AssertionKind::Exists)
            .with_instruction("if text ends with 'a' or text ends with 'b' then cy.reload()");
        let script = generate(&[action], Some(&config(Framework::Cypress)));
        assert!(!script.contains("if ("), "{script}");
        assert!(script.contains("// User validation: if text ends with 'a'"), "{script}");
    }

    #[test]
    fn unrecognized_instruction_falls_back_to_template() {
        assert_eq!(compile("do something vague", Framework::Cypress, "#t", "#t"), None);

        let action = Action::click("#t")
            .with_assertion(AssertionKind::Exists)
            .with_instruction("do something vague");
        let script = generate(&[action], Some(&config(Framework::Cypress)));
        assert_eq!(
            script,
            [
                "// Cypress script generated",
                r##"  cy.get("#t").should("exist");"##,
                "  // User validation: do something vague",
            ]
            .join("\n")
        );
    }

    #[test]
    fn quoted_and_does_not_split() {
        let code = compile(
            "text starts with 'rock and roll'",
            Framework::Cypress,
            "#t",
            "#t",
        );
        assert_eq!(
            code.as_deref(),
            Some("cy.get('#t').invoke('text').should('match', /^rock and roll/);")
        );
    }

    #[test]
    fn plain_target_never_compiles() {
        let action = Action::click("#t").with_instruction("text starts with 'a'");
        let script = generate(&[action], Some(&config(Framework::Plain)));
        assert_eq!(
            script,
            "  // No assertion syntax in plain JS\n  // User validation: text starts with 'a'"
        );
    }
}

mod ends_with {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    /// Pull the `/.../` literal out of generated code
    fn regex_literal(code: &str) -> String {
        let start = code.find('/').unwrap() + 1;
        let end = code.rfind('/').unwrap();
        code[start..end].to_string()
    }

    #[test]
    fn suffix_regex_is_anchored_without_trailing_space() {
        for fw in [Framework::Playwright, Framework::Cypress] {
            let locator = resolve_locator("#t", &BTreeMap::new(), fw);
            let code = compile("text ends with 'done.'", fw, "#t", &locator).unwrap();
            let literal = regex_literal(&code);
            assert_eq!(literal, r"done\.$", "{fw}");

            let fixed = Regex::new(&literal).unwrap();
            assert!(fixed.is_match("all done."));
            assert!(!fixed.is_match("done. more"));
        }
    }

    #[test]
    fn trailing_space_form_would_never_match() {
        // `/done\.$ /` requires a space after end of input
        let legacy = Regex::new(r"done\.$ ").unwrap();
        assert!(!legacy.is_match("all done."));
        assert!(!legacy.is_match("all done. "));

        let code = compile("value ends with 'x'", Framework::Cypress, "#t", "#t").unwrap();
        assert!(!code.contains("$ /"));
    }

    #[test]
    fn selenium_suffix_is_literal() {
        let code = compile("text ends with 'a+b'", Framework::Selenium, "#t", "#t").unwrap();
        assert_eq!(
            code,
            r#"assert(driver.findElement(By.cssSelector('#t')).getText().endsWith("a+b"));"#
        );
    }
}

mod locators {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cypress_returns_selector_even_when_mapped() {
        let mut map = BTreeMap::new();
        map.insert("#t".to_string(), "page.locator('#t')".to_string());
        assert_eq!(resolve_locator("#t", &map, Framework::Cypress), "#t");
        assert_eq!(resolve_locator("#u", &map, Framework::Cypress), "#u");
    }
}

mod templates {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_is_falls_back_to_exists() {
        let templates = ActionTemplates::default()
            .with_assert(AssertionKind::Exists, "cy.get('{selector}').should('exist');");
        let template = assertion_template(AssertionKind::ValueIs, &templates);
        assert_eq!(
            render(template, "#t", "#t", Some("v")),
            "cy.get('#t').should('exist');"
        );
    }

    #[test]
    fn user_templates_override_per_key() {
        let raw = RawConfig::from_json_str(
            r#"{
                "framework": "cypress",
                "actionTemplates": {
                    "click": "cy.get(\"{selector}\").click({ force: true });",
                    "assert": { "value is": "cy.get(\"{selector}\").should(\"have.value\", \"{value}\").and(\"be.visible\");" }
                }
            }"#,
        )
        .unwrap();
        let actions = vec![
            Action::click("#a"),
            Action::input("#b", "v").with_assertion(AssertionKind::ValueIs),
            Action::input("#c", "w"),
        ];
        assert_eq!(
            generate(&actions, Some(&raw)),
            [
                "// Cypress script generated",
                r##"  cy.get("#a").click({ force: true });"##,
                r##"  cy.get("#b").should("have.value", "v").and("be.visible");"##,
                r##"  cy.get("#c").type("w");"##,
            ]
            .join("\n")
        );
    }
}

mod files {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recording_review_and_yaml_config() {
        let dir = tempfile::TempDir::new().unwrap();

        let actions_path = dir.path().join("actions.json");
        std::fs::write(
            &actions_path,
            r##"{ "actions": [
                { "type": "click", "tag": "BUTTON", "selector": "#menu", "timestamp": 1 },
                { "type": "input", "tag": "INPUT", "selector": "#name", "value": "Ada", "timestamp": 2 },
                { "type": "click", "tag": "A", "selector": "#logout", "timestamp": 3 }
            ] }"##,
        )
        .unwrap();

        let config_path = dir.path().join("scriptsmith.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "framework: selenium").unwrap();

        let recording = Recording::load(&actions_path).unwrap();
        let review = Review::new()
            .select([0, 1])
            .with_assertion(1, AssertionEdit::new(AssertionKind::ValueIs));
        let raw = RawConfig::load(&config_path).unwrap();

        let script = generate(&review.apply(&recording.actions), Some(&raw));
        let path = write_script(dir.path(), &script).unwrap();

        assert!(path.ends_with(DEFAULT_SCRIPT_NAME));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            written.lines().skip(4).collect::<Vec<_>>(),
            vec![
                r##"  driver.findElement(By.cssSelector("#menu")).click();"##,
                r##"  assert(driver.findElement(By.cssSelector("#name")).getAttribute("value") === "Ada");"##,
                "})();",
            ]
        );
    }
}
