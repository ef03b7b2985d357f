use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::spec::normalize;
use crate::{PathSpec, SelectionError, SelectionKind, TypeProbe};

/// The full, ordered selection for one backup invocation.
///
/// Entries are kept in the two groups the caller supplied them in. Order
/// within each group is preserved because the legacy `original` compile
/// strategy derives rule precedence from it; the `sorted` strategy ignores
/// it. A set is built fresh for every invocation and never mutated.
///
/// All filter patterns compiled from the set are anchored at the set's
/// transfer root, which defaults to the filesystem root. Construction
/// rejects entries that fall outside the root rather than silently
/// re-anchoring them.
#[derive(Clone, Debug)]
pub struct SelectionSet {
    includes: Vec<PathSpec>,
    excludes: Vec<PathSpec>,
    transfer_root: PathBuf,
}

impl SelectionSet {
    /// Builds a set anchored at the filesystem root.
    pub fn new(
        includes: Vec<PathSpec>,
        excludes: Vec<PathSpec>,
    ) -> Result<Self, SelectionError> {
        Self::with_transfer_root(includes, excludes, "/")
    }

    /// Builds a set whose compiled patterns are anchored at `transfer_root`.
    pub fn with_transfer_root(
        includes: Vec<PathSpec>,
        excludes: Vec<PathSpec>,
        transfer_root: impl AsRef<Path>,
    ) -> Result<Self, SelectionError> {
        let transfer_root = normalize(transfer_root.as_ref())?;

        for spec in includes.iter().chain(&excludes) {
            if !spec.path().starts_with(&transfer_root) {
                return Err(SelectionError::OutsideRoot {
                    root: transfer_root.clone(),
                    path: spec.path().to_path_buf(),
                });
            }
        }

        Ok(Self {
            includes,
            excludes,
            transfer_root,
        })
    }

    /// Convenience constructor: classifies two raw path lists through
    /// `probe` and anchors the set at the filesystem root.
    pub fn from_paths<I, E>(
        includes: I,
        excludes: E,
        probe: &dyn TypeProbe,
    ) -> Result<Self, SelectionError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
        E: IntoIterator,
        E::Item: AsRef<Path>,
    {
        let includes = includes
            .into_iter()
            .map(|raw| PathSpec::probed(raw, SelectionKind::Include, probe))
            .collect::<Result<Vec<_>, _>>()?;
        let excludes = excludes
            .into_iter()
            .map(|raw| PathSpec::probed(raw, SelectionKind::Exclude, probe))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(includes, excludes)
    }

    /// Included entries in caller order.
    #[must_use]
    pub fn includes(&self) -> &[PathSpec] {
        &self.includes
    }

    /// Excluded entries in caller order.
    #[must_use]
    pub fn excludes(&self) -> &[PathSpec] {
        &self.excludes
    }

    /// The path all compiled patterns are anchored at.
    #[must_use]
    pub fn transfer_root(&self) -> &Path {
        &self.transfer_root
    }

    /// Fail-fast validation: the same normalised path in both groups is a
    /// user configuration error, not a silent override.
    ///
    /// The check is exact-path only. A directory included with a different
    /// path excluded beneath it is legitimate; rule ordering resolves it.
    pub fn detect_conflict(&self) -> Result<(), SelectionError> {
        let excluded: HashSet<&Path> = self.excludes.iter().map(PathSpec::path).collect();

        for spec in &self.includes {
            if excluded.contains(spec.path()) {
                return Err(SelectionError::Conflict(spec.path().to_path_buf()));
            }
        }
        Ok(())
    }

    /// The form of `path` relative to the transfer root; empty for the root
    /// itself. Construction guarantees every entry lives under the root, so
    /// this cannot fail for paths taken from the set. Passing any other path
    /// trips a debug assertion; release builds return it unchanged.
    #[must_use]
    pub fn relative_to_root<'a>(&self, path: &'a Path) -> &'a Path {
        debug_assert!(
            path.starts_with(&self.transfer_root),
            "{} is not under the transfer root {}",
            path.display(),
            self.transfer_root.display()
        );
        path.strip_prefix(&self.transfer_root).unwrap_or(path)
    }
}
