//! Shared test harness: an in-memory first-match-wins filter engine.
//!
//! Close enough to the real transfer engine's traversal contract to
//! exercise compiled rule lists end to end: paths are visited top down, the
//! first matching rule decides, a directory that loses is pruned with its
//! whole subtree, and a file under an admitted directory still needs its
//! own admitting rule.
//!
//! The matcher only understands the closed set of pattern shapes the
//! compiler emits: anchored exact paths, anchored directory-only paths
//! (trailing `/`), anchored subtrees (trailing `/**`) and the universal
//! `**`.

use rules::{FilterRule, RuleAction, RuleList};

/// Applies `list` to a flat tree of relative file paths and returns the
/// files the engine would copy, in input order.
pub fn copied_files(list: &RuleList, files: &[&str]) -> Vec<String> {
    let mut copied = Vec::new();

    'files: for file in files {
        let components: Vec<&str> = file.split('/').collect();

        // Every ancestor directory must win an include decision before the
        // engine descends far enough to consider the file itself.
        for depth in 1..components.len() {
            let dir_path = components[..depth].join("/");
            if !admitted(list, &dir_path, true) {
                continue 'files;
            }
        }

        if admitted(list, file, false) {
            copied.push((*file).to_owned());
        }
    }

    copied
}

/// First-match-wins decision for a single path.
fn admitted(list: &RuleList, path: &str, is_dir: bool) -> bool {
    for rule in list {
        if matches(rule, path, is_dir) {
            return rule.action() == RuleAction::Include;
        }
    }
    // The engine includes unmatched paths by default. Compiled lists always
    // terminate with a catch-all, so this only fires for hand-built lists.
    true
}

fn matches(rule: &FilterRule, path: &str, is_dir: bool) -> bool {
    let rendered = rule.render();
    let pattern = rendered.strip_prefix('/').unwrap_or(&rendered);

    if pattern == "**" {
        return true;
    }
    if let Some(base) = pattern.strip_suffix("/**") {
        return path.starts_with(&format!("{base}/"));
    }
    if let Some(dir) = pattern.strip_suffix('/') {
        return is_dir && path == dir;
    }
    path == pattern
}
