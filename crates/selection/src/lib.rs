#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `selection` models the user-facing half of the snapshot tool's
//! selection-to-filter compiler: the list of absolute paths a user marked for
//! inclusion in or exclusion from a backup. [`PathSpec`] normalises one entry
//! and tags it with a [`SelectionKind`] and an [`EntryKind`];
//! [`SelectionSet`] groups the entries for a single backup invocation and
//! validates them before any filter rules are synthesised by the `rules`
//! crate.
//!
//! # Design
//!
//! - [`PathSpec`] rejects malformed input (empty strings, relative paths) at
//!   construction, so nothing downstream re-validates.
//! - Whether an entry names a file or a directory changes the rules compiled
//!   for it. The distinction is resolved once, at construction, through the
//!   [`TypeProbe`] seam and cached for the lifetime of the set; tests
//!   substitute a fixed table where production code uses [`FsProbe`].
//! - [`SelectionSet::detect_conflict`] is the fail-fast gate: a path listed
//!   in both groups is a user configuration error, never a silent override.
//!
//! # Invariants
//!
//! - Every [`PathSpec`] path is absolute and normalised, with no trailing
//!   slash except for the filesystem root itself.
//! - Caller order within each group is preserved; the legacy compile
//!   strategy depends on it.
//! - All selection paths live under the set's transfer root.
//!
//! # Errors
//!
//! All failures surface as [`SelectionError`]. The conflict variant carries
//! the offending path so the surrounding application can present the message
//! verbatim to the user.
//!
//! # Examples
//!
//! ```
//! use selection::{PathSpec, SelectionKind, SelectionSet};
//!
//! let includes = vec![
//!     PathSpec::directory("/home/user/documents", SelectionKind::Include).unwrap(),
//! ];
//! let excludes = vec![
//!     PathSpec::directory("/home/user/documents/drafts", SelectionKind::Exclude).unwrap(),
//! ];
//!
//! let set = SelectionSet::new(includes, excludes).unwrap();
//! assert!(set.detect_conflict().is_ok());
//! ```

mod error;
mod kind;
mod probe;
mod set;
mod spec;

pub use error::SelectionError;
pub use kind::{EntryKind, SelectionKind};
pub use probe::{FsProbe, TypeProbe};
pub use set::SelectionSet;
pub use spec::PathSpec;
