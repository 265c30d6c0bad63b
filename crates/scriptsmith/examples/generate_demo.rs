//! Generate Demo - One Recording, Four Frameworks
//!
//! Renders the same reviewed recording for every supported framework and
//! shows how natural-language instructions compile.
//!
//! # Running
//!
//! ```bash
//! cargo run --example generate_demo -p scriptsmith
//! ```

#![allow(clippy::uninlined_format_args, clippy::unwrap_used)]

use scriptsmith::prelude::*;

fn main() {
    println!("=== Scriptsmith Generate Demo ===\n");

    demo_frameworks();
    demo_instructions();
}

fn recording() -> Vec<Action> {
    vec![
        Action::click("#login").with_tag("BUTTON"),
        Action::input("#email", "ada@example.com").with_tag("INPUT"),
        Action::click("#submit")
            .with_tag("BUTTON")
            .with_instruction("text does not contain 'error' and report 'sent' if text starts with 'thanks'"),
    ]
}

fn demo_frameworks() {
    println!("--- Same recording, every framework ---\n");
    let actions = recording();

    println!("[no configuration]");
    println!("{}\n", generate(&actions, None));

    for fw in Framework::ALL {
        println!("[{}]", fw);
        println!("{}\n", generate(&actions, Some(&RawConfig::for_framework(fw))));
    }
}

fn demo_instructions() {
    println!("--- Instruction compilation (cypress) ---\n");
    let compiler = AssertionCompiler::new(Framework::Cypress);
    let samples = [
        "value starts with '$'",
        "is the 2nd child",
        "text ends with 'a' or text ends with 'b'",
        "wait 500 ms for the animation",
        "retry until text ends with 'ready'",
        "on failure, cy.screenshot()",
        "do something vague",
    ];

    for instruction in samples {
        match compiler.compile(instruction, "#status", "#status") {
            Some(code) => println!("{:<45} =>\n{}\n", instruction, code),
            None => println!("{:<45} => (not understood)\n", instruction),
        }
    }
}
