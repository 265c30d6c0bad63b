//! Ordered phrase recognizers.
//!
//! The instruction is lower-cased and trimmed, then offered to each
//! recognizer in [`CASCADE`] order. The first recognizer that claims the text
//! decides the outcome; if none does, the instruction is not understood.
//!
//! Leaf checks accept a leading noun phrase (`button text ends with ...`),
//! except in clauses led by a compound keyword, so that
//! `report 'x' if text starts with 'y'` is read as a report and not as the
//! prefix check it contains. `if`, `retry until`, `report` and `on failure`
//! must lead their clause; `wait` may appear anywhere.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::{debug, trace};

use super::clause::{Clause, Predicate, Subject};

/// Outcome of offering text to one recognizer
#[derive(Debug)]
enum Recognition {
    /// Pattern does not apply, try the next one
    Skip,
    /// Pattern applies and produced a clause
    Parsed(Clause),
    /// Pattern applies but its operands are not understood
    Rejected,
}

type Recognizer = fn(&Parser, &str, usize) -> Recognition;

/// Recognizers in priority order
const CASCADE: [(&str, Recognizer); 11] = [
    ("conjunction", Parser::conjunction),
    ("disjunction", Parser::disjunction),
    ("not-contains", Parser::not_contains),
    ("starts-with", Parser::starts_with),
    ("ends-with", Parser::ends_with),
    ("nth-child", Parser::nth_child),
    ("conditional", Parser::conditional),
    ("wait", Parser::wait),
    ("retry-until", Parser::retry_until),
    ("report", Parser::report),
    ("on-failure", Parser::on_failure),
];

/// Names of the recognizers, in the order they are tried
#[must_use]
pub fn pattern_order() -> Vec<&'static str> {
    CASCADE.iter().map(|(name, _)| *name).collect()
}

#[derive(Debug)]
struct Patterns {
    compound_lead: Regex,
    and: Regex,
    or: Regex,
    not_contains: Regex,
    starts_with: Regex,
    ends_with: Regex,
    nth_child: Regex,
    conditional: Regex,
    wait: Regex,
    retry_until: Regex,
    report: Regex,
    on_failure: Regex,
}

impl Patterns {
    #[allow(clippy::expect_used)]
    fn compile() -> Self {
        let re = |pattern: &str| Regex::new(pattern).expect("static recognizer pattern");
        let subject_check = |verb: &str| {
            re(&format!(
                r#"(?s)^(?:[\w-]+ )*?(text|value|attribute ([\w-]+)) {verb} ['"]?(.+?)['"]?$"#
            ))
        };
        Self {
            compound_lead: re(r"^(?:if|retry until|report|on failure)\b"),
            and: re(r"\s+and\s+"),
            or: re(r"\s+or\s+"),
            not_contains: subject_check("does not contain"),
            starts_with: subject_check("starts with"),
            ends_with: subject_check("ends with"),
            nth_child: re(r"\bis the (\d+)(?:st|nd|rd|th) child\b"),
            conditional: re(r"(?s)^if (.+?),? then (.+)$"),
            wait: re(
                r"(?s)\bwait (?:up to |for )?(\d+) (seconds|second|ms|milliseconds) for (.+)$",
            ),
            retry_until: re(r"(?s)^retry until (.+)$"),
            report: re(r#"(?s)^report ['"](.+?)['"](?: if (.+))?$"#),
            on_failure: re(r"(?s)^on failure,? (.+)$"),
        }
    }
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(Patterns::compile)
}

/// Parse an instruction into a clause tree.
///
/// Returns `None` when no recognizer claims the text, when a claimed
/// pattern's operands are not understood, or when nesting exceeds `max_depth`.
#[must_use]
pub fn parse(instruction: &str, max_depth: usize) -> Option<Clause> {
    Parser {
        patterns: patterns(),
        max_depth,
    }
    .parse(instruction, 0)
}

#[derive(Debug)]
struct Parser {
    patterns: &'static Patterns,
    max_depth: usize,
}

impl Parser {
    fn parse(&self, instruction: &str, depth: usize) -> Option<Clause> {
        if depth >= self.max_depth {
            debug!(depth, "instruction nesting too deep");
            return None;
        }
        let text = instruction.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        for (name, recognize) in CASCADE {
            match recognize(self, &text, depth) {
                Recognition::Skip => {}
                Recognition::Parsed(clause) => {
                    debug!(pattern = name, depth, "instruction matched");
                    return Some(clause);
                }
                Recognition::Rejected => {
                    debug!(pattern = name, depth, "instruction operands not understood");
                    return None;
                }
            }
        }
        trace!(instruction = %text, "no pattern matched");
        None
    }

    fn parse_boxed(&self, text: &str, depth: usize) -> Option<Box<Clause>> {
        self.parse(text, depth + 1).map(Box::new)
    }

    fn conjunction(&self, text: &str, depth: usize) -> Recognition {
        let Some(parts) = split_outside_quotes(text, &self.patterns.and) else {
            return Recognition::Skip;
        };
        let clauses: Vec<Clause> = parts
            .into_iter()
            .filter_map(|part| self.parse(part, depth + 1))
            .collect();
        if clauses.is_empty() {
            Recognition::Rejected
        } else {
            Recognition::Parsed(Clause::Conjunction(clauses))
        }
    }

    fn disjunction(&self, text: &str, depth: usize) -> Recognition {
        let Some(parts) = split_outside_quotes(text, &self.patterns.or) else {
            return Recognition::Skip;
        };
        let clauses: Vec<Clause> = parts
            .into_iter()
            .filter_map(|part| self.parse(part, depth + 1))
            .collect();
        // Fewer than two understood alternatives: let the leaf patterns try the whole text
        if clauses.len() < 2 {
            Recognition::Skip
        } else {
            Recognition::Parsed(Clause::Disjunction(clauses))
        }
    }

    /// Compound clauses own their nested checks
    fn led_by_compound(&self, text: &str) -> bool {
        self.patterns.compound_lead.is_match(text) || self.patterns.wait.is_match(text)
    }

    fn subject_check(
        &self,
        pattern: &Regex,
        text: &str,
        build: fn(Subject, String) -> Predicate,
    ) -> Recognition {
        if self.led_by_compound(text) {
            return Recognition::Skip;
        }
        let Some(caps) = pattern.captures(text) else {
            return Recognition::Skip;
        };
        let subject = match (caps.get(1).map(|m| m.as_str()), caps.get(2)) {
            (Some("text"), _) => Subject::Text,
            (Some("value"), _) => Subject::Value,
            (_, Some(attr)) => Subject::Attribute(attr.as_str().to_string()),
            _ => return Recognition::Rejected,
        };
        let value = caps.get(3).map_or("", |m| m.as_str()).to_string();
        Recognition::Parsed(Clause::Predicate(build(subject, value)))
    }

    fn not_contains(&self, text: &str, _depth: usize) -> Recognition {
        self.subject_check(&self.patterns.not_contains, text, |subject, value| {
            Predicate::NotContains { subject, value }
        })
    }

    fn starts_with(&self, text: &str, _depth: usize) -> Recognition {
        self.subject_check(&self.patterns.starts_with, text, |subject, value| {
            Predicate::StartsWith { subject, value }
        })
    }

    fn ends_with(&self, text: &str, _depth: usize) -> Recognition {
        self.subject_check(&self.patterns.ends_with, text, |subject, value| {
            Predicate::EndsWith { subject, value }
        })
    }

    fn nth_child(&self, text: &str, _depth: usize) -> Recognition {
        if self.led_by_compound(text) {
            return Recognition::Skip;
        }
        let Some(caps) = self.patterns.nth_child.captures(text) else {
            return Recognition::Skip;
        };
        match caps[1].parse::<u32>() {
            Ok(n) => Recognition::Parsed(Clause::Predicate(Predicate::NthChild(n))),
            Err(_) => Recognition::Rejected,
        }
    }

    fn conditional(&self, text: &str, depth: usize) -> Recognition {
        let Some(caps) = self.patterns.conditional.captures(text) else {
            return Recognition::Skip;
        };
        let Some(condition) = self.parse_boxed(&caps[1], depth) else {
            return Recognition::Rejected;
        };
        let action_raw = caps[2].trim().to_string();
        let action = self.parse_boxed(&action_raw, depth);
        Recognition::Parsed(Clause::Conditional {
            condition,
            action,
            action_raw,
        })
    }

    fn wait(&self, text: &str, _depth: usize) -> Recognition {
        if self.patterns.compound_lead.is_match(text) {
            return Recognition::Skip;
        }
        let Some(caps) = self.patterns.wait.captures(text) else {
            return Recognition::Skip;
        };
        let Ok(amount) = caps[1].parse::<u64>() else {
            return Recognition::Rejected;
        };
        let timeout_ms = if caps[2].starts_with('s') {
            amount.saturating_mul(1000)
        } else {
            amount
        };
        Recognition::Parsed(Clause::Wait {
            timeout_ms,
            what: caps[3].trim().to_string(),
        })
    }

    fn retry_until(&self, text: &str, depth: usize) -> Recognition {
        let Some(caps) = self.patterns.retry_until.captures(text) else {
            return Recognition::Skip;
        };
        let raw = caps[1].trim().to_string();
        let condition = self.parse_boxed(&raw, depth);
        Recognition::Parsed(Clause::RetryUntil { condition, raw })
    }

    fn report(&self, text: &str, depth: usize) -> Recognition {
        let Some(caps) = self.patterns.report.captures(text) else {
            return Recognition::Skip;
        };
        let condition = match caps.get(2) {
            None => None,
            Some(guard) => match self.parse_boxed(guard.as_str(), depth) {
                Some(clause) => Some(clause),
                None => return Recognition::Rejected,
            },
        };
        Recognition::Parsed(Clause::Report {
            message: caps[1].to_string(),
            condition,
        })
    }

    fn on_failure(&self, text: &str, _depth: usize) -> Recognition {
        let Some(caps) = self.patterns.on_failure.captures(text) else {
            return Recognition::Skip;
        };
        Recognition::Parsed(Clause::OnFailure {
            handler: caps[1].trim().to_string(),
        })
    }
}

/// Byte ranges of quoted literals.
///
/// A quote opens at the start of the text or after whitespace and closes on
/// the same quote character followed by the end, whitespace, `,` or `)`.
/// Apostrophes inside words therefore never open a literal.
fn quoted_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut open: Option<(char, usize)> = None;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        match open {
            Some((quote, start)) => {
                if c == quote && next.map_or(true, |n| n.is_whitespace() || n == ',' || n == ')')
                {
                    spans.push(start..idx + c.len_utf8());
                    open = None;
                }
            }
            None => {
                if (c == '\'' || c == '"') && prev.map_or(true, char::is_whitespace) {
                    open = Some((c, idx));
                }
            }
        }
        prev = Some(c);
    }
    spans
}

/// Split `text` on every `separator` match that lies outside quoted literals.
///
/// Returns `None` when no separator qualifies.
fn split_outside_quotes<'a>(text: &'a str, separator: &Regex) -> Option<Vec<&'a str>> {
    let quoted = quoted_spans(text);
    let mut parts = Vec::new();
    let mut last = 0;
    for m in separator.find_iter(text) {
        if quoted.iter().any(|span| span.contains(&m.start())) {
            continue;
        }
        parts.push(&text[last..m.start()]);
        last = m.end();
    }
    if parts.is_empty() {
        return None;
    }
    parts.push(&text[last..]);
    Some(parts)
}
