//! Rendering of parsed instructions through a framework target.

use tracing::debug;

use super::clause::{Clause, Predicate};
use super::recognizer;
use crate::framework::{Element, Framework};

/// Maximum nesting of compound instructions before a sub-instruction is
/// treated as not understood
pub const MAX_DEPTH: usize = 16;

/// First line of a rendered disjunction
pub const ALTERNATIVES_HEADER: &str = "// At least one of the following should pass:";

/// Compiles natural-language assertion instructions for one framework.
///
/// # Example
///
/// ```
/// use scriptsmith::{AssertionCompiler, Framework};
///
/// let compiler = AssertionCompiler::new(Framework::Cypress);
/// let code = compiler.compile("text starts with 'Hi'", "#greeting", "#greeting");
/// assert_eq!(
///     code.as_deref(),
///     Some("cy.get('#greeting').invoke('text').should('match', /^hi/);")
/// );
/// assert!(compiler.compile("do something vague", "#a", "#a").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssertionCompiler {
    framework: Framework,
    max_depth: usize,
}

impl AssertionCompiler {
    /// Create a compiler for `framework`
    #[must_use]
    pub const fn new(framework: Framework) -> Self {
        Self {
            framework,
            max_depth: MAX_DEPTH,
        }
    }

    /// Override the nesting ceiling
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Framework code is emitted for
    #[must_use]
    pub const fn framework(&self) -> Framework {
        self.framework
    }

    /// Parse without rendering
    #[must_use]
    pub fn parse(&self, instruction: &str) -> Option<Clause> {
        recognizer::parse(instruction, self.max_depth)
    }

    /// Compile `instruction` against the element.
    ///
    /// Returns `None` when the instruction is not understood or when the
    /// framework has no rendering for one of its constructs.
    #[must_use]
    pub fn compile(&self, instruction: &str, selector: &str, locator: &str) -> Option<String> {
        let Some(clause) = self.parse(instruction) else {
            debug!(framework = %self.framework, "instruction not understood");
            return None;
        };
        let code = self.render(&clause, &Element::new(selector, locator));
        if code.is_none() {
            debug!(
                framework = %self.framework,
                clause = clause.kind(),
                "no rendering for instruction"
            );
        }
        code
    }

    /// Render a parsed clause
    #[must_use]
    pub fn render(&self, clause: &Clause, el: &Element<'_>) -> Option<String> {
        let target = self.framework.target();
        match clause {
            Clause::Predicate(predicate) => match predicate {
                Predicate::NotContains { subject, value } => {
                    target.not_contains(el, subject, value)
                }
                Predicate::StartsWith { subject, value } => target.starts_with(el, subject, value),
                Predicate::EndsWith { subject, value } => target.ends_with(el, subject, value),
                Predicate::NthChild(n) => target.nth_child(el, *n),
            },
            Clause::Conjunction(parts) => {
                let lines: Vec<String> = parts.iter().filter_map(|p| self.render(p, el)).collect();
                (!lines.is_empty()).then(|| lines.join("\n"))
            }
            Clause::Disjunction(parts) => {
                let alternatives: Vec<String> =
                    parts.iter().filter_map(|p| self.render(p, el)).collect();
                if alternatives.len() < 2 {
                    return None;
                }
                let mut out = vec![ALTERNATIVES_HEADER.to_string()];
                out.extend(
                    alternatives
                        .iter()
                        .flat_map(|code| code.lines())
                        .map(|line| format!("//   {line}")),
                );
                Some(out.join("\n"))
            }
            Clause::Conditional {
                condition,
                action,
                action_raw,
            } => {
                let condition = self.render_condition(condition, el)?;
                let action = action
                    .as_deref()
                    .and_then(|a| self.render(a, el))
                    .unwrap_or_else(|| action_raw.clone());
                target.conditional(&condition, &action)
            }
            Clause::Wait { timeout_ms, what } => target.wait(el, *timeout_ms, what),
            Clause::RetryUntil { condition, raw } => {
                let compiled = match condition.as_deref() {
                    Some(c) if !c.is_check() => return None,
                    Some(c) => self.render(c, el).map(|code| as_condition(&code)),
                    None => None,
                };
                target.retry_until(compiled.as_deref(), raw)
            }
            Clause::Report { message, condition } => match condition {
                Some(guard) => {
                    let guard = self.render_condition(guard, el)?;
                    target.report(message, Some(&guard))
                }
                None => target.report(message, None),
            },
            Clause::OnFailure { handler } => target.on_failure(handler),
        }
    }
}

impl AssertionCompiler {
    /// Render a clause as a boolean expression; statements and comment
    /// blocks cannot stand inside `if (...)`
    fn render_condition(&self, clause: &Clause, el: &Element<'_>) -> Option<String> {
        if !clause.is_check() {
            debug!(clause = clause.kind(), "clause cannot be used as a condition");
            return None;
        }
        self.render(clause, el).map(|code| as_condition(&code))
    }
}

/// Compile `instruction` for `framework`.
///
/// Shorthand for [`AssertionCompiler::compile`] with the default ceiling.
#[must_use]
pub fn compile(
    instruction: &str,
    framework: Framework,
    selector: &str,
    locator: &str,
) -> Option<String> {
    AssertionCompiler::new(framework).compile(instruction, selector, locator)
}

/// Turn compiled statements into one boolean expression
fn as_condition(code: &str) -> String {
    code.lines()
        .map(|line| line.trim().trim_end_matches(';').trim_end())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" && ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PW_LOCATOR: &str = "page.locator('#msg')";

    fn pw(instruction: &str) -> Option<String> {
        compile(instruction, Framework::Playwright, "#msg", PW_LOCATOR)
    }

    fn cy(instruction: &str) -> Option<String> {
        compile(instruction, Framework::Cypress, "#msg", "#msg")
    }

    fn se(instruction: &str) -> Option<String> {
        compile(instruction, Framework::Selenium, "#msg", "#msg")
    }

    mod predicate_tests {
        use super::*;

        #[test]
        fn test_ends_with_has_no_trailing_space() {
            for code in [pw("text ends with 'b'"), cy("text ends with 'b'")] {
                let code = code.unwrap();
                assert!(code.contains("/b$/"), "{code}");
                assert!(!code.contains("$ /"), "{code}");
            }
        }

        #[test]
        fn test_prefix_value_is_escaped() {
            assert_eq!(
                pw("value starts with '$1.00'").unwrap(),
                r"expect(await page.locator('#msg').inputValue()).toMatch(/^\$1\.00/);"
            );
        }

        #[test]
        fn test_selenium_prefix_is_literal() {
            assert_eq!(
                se("text starts with 'a.b'").unwrap(),
                r#"assert(driver.findElement(By.cssSelector('#msg')).getText().startsWith("a.b"));"#
            );
        }

        #[test]
        fn test_plain_renders_nothing() {
            assert_eq!(
                compile(
                    "text starts with 'a'",
                    Framework::Plain,
                    "#msg",
                    "document.querySelector(\"#msg\")"
                ),
                None
            );
        }
    }

    mod compound_tests {
        use super::*;

        #[test]
        fn test_conjunction_joins_parts() {
            let both = cy("text starts with 'a' and text ends with 'b'").unwrap();
            let first = cy("text starts with 'a'").unwrap();
            let second = cy("text ends with 'b'").unwrap();
            assert_eq!(both, format!("{first}\n{second}"));
        }

        #[test]
        fn test_disjunction_is_comment_only() {
            let code = pw("text starts with 'a' or text ends with 'b'").unwrap();
            assert!(code.lines().all(|line| line.starts_with("//")));
            assert_eq!(code.lines().next(), Some(ALTERNATIVES_HEADER));
            assert_eq!(code.lines().count(), 3);
        }

        #[test]
        fn test_conditional_uses_condition_expression() {
            let code = pw("if text starts with 'a', then report 'seen'").unwrap();
            assert_eq!(
                code,
                "if (expect(await page.locator('#msg').textContent()).toMatch(/^a/)) {\n  console.log('seen');\n}"
            );
        }

        #[test]
        fn test_conditional_injects_raw_action() {
            let code = cy("if text ends with '!' then cy.reload()").unwrap();
            assert!(code.starts_with("cy.then(() => { if ("));
            assert!(code.contains("{ cy.reload() }"));
        }

        #[test]
        fn test_wait_converts_seconds() {
            assert_eq!(
                pw("wait up to 3 seconds for the banner").unwrap(),
                "await page.locator('#msg').waitFor({ timeout: 3000 }); // waiting for the banner"
            );
        }

        #[test]
        fn test_retry_until_uses_compiled_condition() {
            let code = pw("retry until text ends with 'done'").unwrap();
            assert!(code.starts_with("// Retry logic: while (!(await (expect("));
            assert!(!code.contains(";)"));
        }

        #[test]
        fn test_retry_until_falls_back_to_raw() {
            assert_eq!(
                se("retry until the page settles").unwrap(),
                "// Retry logic: while (!(await (the page settles))) { /* retry */ }"
            );
        }

        #[test]
        fn test_report_guarded_and_unguarded() {
            assert_eq!(cy("report 'hello'").unwrap(), "cy.log('hello');");
            let guarded = cy("report 'bar' if text starts with 'baz'").unwrap();
            assert_eq!(
                guarded,
                "if (cy.get('#msg').invoke('text').should('match', /^baz/)) { cy.log('bar'); }"
            );
        }

        #[test]
        fn test_value_conjunction_with_guarded_report() {
            let code = pw("value does not contain 'foo' and report 'bar' if text starts with 'baz'")
                .unwrap();
            let lines: Vec<&str> = code.lines().collect();
            assert_eq!(lines.len(), 2);
            assert!(lines[0].contains(".not.toContain(\"foo\")"));
            assert!(lines[1].contains("console.log('bar')"));
        }

        #[test]
        fn test_statements_are_not_conditions() {
            for instruction in [
                "if text ends with 'a' or text ends with 'b' then cy.reload()",
                "if wait 5 seconds for spinner, then go()",
                "report 'x' if on failure, log()",
                "report 'x' if report 'y'",
                "retry until wait 2 seconds for toast",
            ] {
                assert_eq!(pw(instruction), None, "{instruction}");
                assert_eq!(cy(instruction), None, "{instruction}");
            }
        }

        #[test]
        fn test_conjunction_of_checks_is_a_condition() {
            use crate::dsl::Subject;

            let check = |value: &str| {
                Clause::Predicate(Predicate::EndsWith {
                    subject: Subject::Text,
                    value: value.into(),
                })
            };
            let clause = Clause::Conditional {
                condition: Box::new(Clause::Conjunction(vec![check("a"), check("b")])),
                action: None,
                action_raw: "go()".into(),
            };
            let code = AssertionCompiler::new(Framework::Playwright)
                .render(&clause, &Element::new("#msg", PW_LOCATOR))
                .unwrap();
            let header = code.lines().next().unwrap();
            assert!(header.starts_with("if (expect("), "{code}");
            assert!(header.contains(") && expect("), "{code}");
            assert!(header.ends_with(") {"), "{code}");
        }

        #[test]
        fn test_on_failure_wraps_handler() {
            let code = pw("on failure, console.error(e)").unwrap();
            assert_eq!(
                code,
                "try {\n  // assertion\n} catch (e) {\n  console.error(e)\n}"
            );
        }
    }

    #[test]
    fn test_unrecognized_is_none() {
        for fw in Framework::ALL {
            assert_eq!(compile("do something vague", fw, "#a", "#a"), None);
        }
    }

    #[test]
    fn test_custom_depth() {
        let shallow = AssertionCompiler::new(Framework::Playwright).with_max_depth(1);
        assert!(shallow
            .compile("if text ends with 'a' then go()", "#a", "x")
            .is_none());
        assert!(shallow.compile("text ends with 'a'", "#a", "x").is_some());
    }

    #[test]
    fn test_as_condition() {
        assert_eq!(as_condition("a();\nb();"), "a() && b()");
        assert_eq!(as_condition("  x  "), "x");
    }
}
