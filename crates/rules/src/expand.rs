//! Ancestor-traversal expansion.
//!
//! A first-match-wins engine never descends into a directory the rule list
//! drops, so every include needs its ancestor chain held open with exact,
//! non-recursive directory rules: `/a/` lets the engine enter `a` without
//! admitting any of `a`'s other contents. Without these rules the terminal
//! catch-all would prune a deep include's ancestors before the engine ever
//! reached it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use selection::SelectionSet;

/// Ancestor directories (relative to the transfer root) that need
/// traversal rules, shallowest first with a lexical tie-break.
///
/// Ancestors already covered by an included directory entry are skipped;
/// that entry's own recursive rules admit them.
pub(crate) fn ancestor_chain(set: &SelectionSet) -> Vec<PathBuf> {
    let covered: BTreeSet<&Path> = set
        .includes()
        .iter()
        .filter(|spec| spec.is_directory())
        .map(|spec| set.relative_to_root(spec.path()))
        .collect();

    let mut ancestors = BTreeSet::new();
    for spec in set.includes() {
        for parent in parents_shallow_first(set.relative_to_root(spec.path())) {
            if !covered.contains(parent) {
                ancestors.insert(parent.to_path_buf());
            }
        }
    }

    let mut chain: Vec<PathBuf> = ancestors.into_iter().collect();
    chain.sort_by(|a, b| {
        a.components()
            .count()
            .cmp(&b.components().count())
            .then_with(|| a.cmp(b))
    });
    chain
}

/// Strict ancestors of `rel` below the transfer root, shallowest first.
/// The root itself (the empty relative path) is never part of the chain.
pub(crate) fn parents_shallow_first(rel: &Path) -> Vec<&Path> {
    let mut chain: Vec<&Path> = rel
        .ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    chain.reverse();
    chain
}
