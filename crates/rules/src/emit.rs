//! Serialization boundary to the external transfer engine.
//!
//! Formatting only: rule order is preserved verbatim and the pattern syntax
//! must match what the engine parses byte for byte, both for the
//! `--include=`/`--exclude=` argument interface and for the `+`/`-`
//! filter-file grammar.

use crate::{RuleAction, RuleList};

/// Renders `list` as one `--include=PATTERN`/`--exclude=PATTERN` argument
/// per rule, in evaluation order.
#[must_use]
pub fn to_args(list: &RuleList) -> Vec<String> {
    list.iter()
        .map(|rule| {
            let flag = match rule.action() {
                RuleAction::Include => "--include",
                RuleAction::Exclude => "--exclude",
            };
            format!("{flag}={}", rule.render())
        })
        .collect()
}

/// Renders `list` in the engine's filter-file grammar: one `+ PATTERN` or
/// `- PATTERN` line per rule, each terminated by a newline.
#[must_use]
pub fn to_filter_file(list: &RuleList) -> String {
    let mut out = String::new();
    for rule in list {
        out.push(rule.action().sign());
        out.push(' ');
        out.push_str(&rule.render());
        out.push('\n');
    }
    out
}
