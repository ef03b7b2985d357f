//! The core ordering algorithm: turns a validated selection into the rule
//! sequence the transfer engine executes.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use selection::{PathSpec, SelectionError, SelectionKind, SelectionSet};

use crate::expand::{ancestor_chain, parents_shallow_first};
use crate::{FilterRule, RuleList, trace};

/// Rule ordering strategy, chosen explicitly for every compilation.
///
/// `Original` reproduces the legacy caller-order behaviour and exists only
/// for regression comparison against historical backups: it mishandles an
/// exclude that is a strict ancestor of a later include, because the
/// shallower exclude rule lands first and shadows the deeper include.
/// `Sorted` orders rules by path specificity and is the production
/// strategy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Legacy compilation driven by caller-supplied entry order.
    Original,
    /// Specificity-ordered compilation; deeper entries outrank shallower
    /// ones regardless of kind or input order.
    #[default]
    Sorted,
}

impl Strategy {
    /// Token used on the configuration surface and in trace output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Sorted => "sorted",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy token cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown selections strategy: {0}")]
pub struct UnknownStrategy(String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "sorted" => Ok(Self::Sorted),
            other => Err(UnknownStrategy(other.to_owned())),
        }
    }
}

/// Compiles `set` into the ordered rule list for the transfer engine.
///
/// Conflict detection runs first and is the only failure mode for a
/// well-formed set; the probe work needed to classify entries already
/// happened when the set was built, so compilation itself is pure. The
/// strategy is an explicit parameter rather than ambient state so
/// concurrent invocations can compile the same selection under different
/// strategies without interference.
///
/// Whatever the strategy, the returned list ends with exactly one anchored
/// catch-all exclude: anything not explicitly kept is dropped.
pub fn compile(set: &SelectionSet, strategy: Strategy) -> Result<RuleList, SelectionError> {
    set.detect_conflict()?;

    let mut rules = match strategy {
        Strategy::Original => original_order(set),
        Strategy::Sorted => sorted_order(set),
    };
    rules.push(catch_all());

    trace::trace_compile_summary(strategy.name(), rules.len());
    Ok(RuleList::new(rules))
}

/// Closed-world terminator: matches everything at any depth below the
/// transfer root.
fn catch_all() -> FilterRule {
    FilterRule::exclude("**").anchored()
}

/// Legacy layout: every exclude first in caller order, then each include
/// preceded by its not-yet-emitted ancestor rules, in caller order.
///
/// Keeping all excludes ahead of all includes is precisely the historical
/// defect: a shallow exclude shadows any deeper include that follows.
fn original_order(set: &SelectionSet) -> Vec<FilterRule> {
    let mut rules = Vec::new();
    let mut emitted = HashSet::new();

    for spec in set.excludes() {
        for rule in entry_rules(set, spec) {
            push_unique(&mut rules, &mut emitted, rule);
        }
    }

    for spec in set.includes() {
        let rel = set.relative_to_root(spec.path());
        for ancestor in parents_shallow_first(rel) {
            push_unique(&mut rules, &mut emitted, traversal_rule(ancestor));
        }
        for rule in entry_rules(set, spec) {
            push_unique(&mut rules, &mut emitted, rule);
        }
    }

    rules
}

/// Specificity layout: every ancestor-traversal rule first, then all
/// entries ordered by depth descending with a lexical tie-break.
///
/// Traversal rules name exact ancestor directories only, so putting them
/// ahead of every exclude cannot admit anything an exclude should drop.
/// Sorting the entries deepest-first realises "the most specific matching
/// rule wins" structurally, independent of caller order.
fn sorted_order(set: &SelectionSet) -> Vec<FilterRule> {
    let mut rules = Vec::new();
    let mut emitted = HashSet::new();

    for ancestor in ancestor_chain(set) {
        push_unique(&mut rules, &mut emitted, traversal_rule(&ancestor));
    }

    let mut entries: Vec<&PathSpec> = set.includes().iter().chain(set.excludes()).collect();
    entries.sort_by(|a, b| {
        b.depth()
            .cmp(&a.depth())
            .then_with(|| a.path().cmp(b.path()))
    });

    for spec in entries {
        for rule in entry_rules(set, spec) {
            push_unique(&mut rules, &mut emitted, rule);
        }
    }

    rules
}

/// The rules synthesised for one selection entry.
///
/// - excluded path: one exact anchored rule; the engine prunes an excluded
///   directory without help.
/// - included file: one exact anchored rule.
/// - included directory: a directory-only rule so the engine creates and
///   enters it, then a `/**` rule covering the subtree.
/// - the transfer root itself degenerates to a single recursive rule.
fn entry_rules(set: &SelectionSet, spec: &PathSpec) -> Vec<FilterRule> {
    let rel = set.relative_to_root(spec.path());

    if rel.as_os_str().is_empty() {
        return match spec.kind() {
            SelectionKind::Include => vec![FilterRule::include("**").anchored()],
            // Excluding the transfer root is already what the terminal
            // catch-all expresses; emitting it again would duplicate it.
            SelectionKind::Exclude => Vec::new(),
        };
    }

    let pattern = rel.to_string_lossy();
    match spec.kind() {
        SelectionKind::Exclude => vec![FilterRule::exclude(pattern.as_ref()).anchored()],
        SelectionKind::Include if spec.is_directory() => vec![
            FilterRule::include(format!("{pattern}/")).anchored(),
            FilterRule::include(format!("{pattern}/**")).anchored(),
        ],
        SelectionKind::Include => vec![FilterRule::include(pattern.as_ref()).anchored()],
    }
}

/// Non-recursive, directory-only allow rule for one ancestor segment.
fn traversal_rule(ancestor: &Path) -> FilterRule {
    FilterRule::include(format!("{}/", ancestor.to_string_lossy())).anchored()
}

/// Appends `rule` unless an identical action/pattern pair was already
/// emitted. Duplicates arise from overlapping ancestor chains and repeated
/// entries.
fn push_unique(rules: &mut Vec<FilterRule>, emitted: &mut HashSet<String>, rule: FilterRule) {
    let key = format!("{} {}", rule.action().sign(), rule.render());
    if emitted.insert(key) {
        trace::trace_rule_added(&rule);
        rules.push(rule);
    }
}
