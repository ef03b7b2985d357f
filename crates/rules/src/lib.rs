#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `rules` compiles a validated [`selection::SelectionSet`] into the
//! ordered include/exclude rule list a first-match-wins transfer engine
//! executes. The hard part is ordering: include and exclude paths may nest
//! inside one another arbitrarily, and with an engine that stops at the
//! first matching rule, a shallow rule placed too early silently swallows a
//! deeper, more specific one.
//!
//! # Design
//!
//! - [`FilterRule`] is the engine-facing tuple of action, pattern and
//!   anchoring; [`RuleList`] is the compiled, ordered sequence, always
//!   terminated by a single anchored catch-all exclude.
//! - [`compile`] owns the ordering. [`Strategy::Sorted`] places rules for
//!   deeper paths ahead of rules for shallower paths so the most specific
//!   rule wins structurally; [`Strategy::Original`] reproduces the legacy
//!   caller-order layout and is retained only for regression comparison.
//! - Every include's ancestor chain is held open with exact, non-recursive
//!   directory rules (see `expand`), because the catch-all would otherwise
//!   prune the way down to a deep include.
//! - [`emit`] serialises the list for the engine's argument and
//!   filter-file interfaces, preserving order verbatim.
//!
//! # Invariants
//!
//! - The engine evaluates rules top to bottom; the first match wins.
//! - A compiled list ends with exactly one anchored catch-all exclude, so
//!   nothing outside the accumulated includes leaks through.
//! - Compilation is pure and deterministic: the same set and strategy
//!   always produce a byte-identical list.
//!
//! # Errors
//!
//! [`compile`] fails only with [`selection::SelectionError::Conflict`]
//! when the same normalised path is both included and excluded; malformed
//! paths never reach this crate.
//!
//! # Examples
//!
//! ```
//! use rules::{Strategy, compile};
//! use selection::{PathSpec, SelectionKind, SelectionSet};
//!
//! let includes = vec![
//!     PathSpec::directory("/home/user/work", SelectionKind::Include).unwrap(),
//! ];
//! let excludes = vec![
//!     PathSpec::directory("/home/user/work/tmp", SelectionKind::Exclude).unwrap(),
//! ];
//! let set = SelectionSet::new(includes, excludes).unwrap();
//!
//! let list = compile(&set, Strategy::Sorted).unwrap();
//! let args = list.to_args();
//! // The deeper exclude precedes the include it would otherwise lose to,
//! // and the catch-all terminates the list.
//! assert_eq!(args.first().unwrap(), "--include=/home/");
//! assert_eq!(args.last().unwrap(), "--exclude=/**");
//! ```

mod action;
mod compile;
pub mod emit;
mod expand;
mod list;
mod rule;
mod trace;

pub use action::RuleAction;
pub use compile::{Strategy, UnknownStrategy, compile};
pub use list::RuleList;
pub use rule::FilterRule;
