use std::path::{Component, Path, PathBuf};

use crate::{EntryKind, SelectionError, SelectionKind, TypeProbe};

/// One normalised include or exclude entry.
///
/// Construction is the only place selection input is validated: empty and
/// relative paths are rejected here, and the file/directory classification
/// is fixed here so compilation never touches the filesystem again.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PathSpec {
    path: PathBuf,
    kind: SelectionKind,
    entry: EntryKind,
}

impl PathSpec {
    /// Creates an entry whose file/directory classification the caller
    /// already knows.
    pub fn new(
        raw: impl AsRef<Path>,
        kind: SelectionKind,
        entry: EntryKind,
    ) -> Result<Self, SelectionError> {
        Ok(Self {
            path: normalize(raw.as_ref())?,
            kind,
            entry,
        })
    }

    /// Creates an entry covering a single file.
    pub fn file(raw: impl AsRef<Path>, kind: SelectionKind) -> Result<Self, SelectionError> {
        Self::new(raw, kind, EntryKind::File)
    }

    /// Creates an entry covering a directory and its subtree.
    pub fn directory(raw: impl AsRef<Path>, kind: SelectionKind) -> Result<Self, SelectionError> {
        Self::new(raw, kind, EntryKind::Directory)
    }

    /// Creates an entry classified through `probe`.
    ///
    /// Paths the probe does not recognise as directories, including paths
    /// that do not exist yet, come back as files.
    pub fn probed(
        raw: impl AsRef<Path>,
        kind: SelectionKind,
        probe: &dyn TypeProbe,
    ) -> Result<Self, SelectionError> {
        let path = normalize(raw.as_ref())?;
        let entry = if probe.is_directory(&path) {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Ok(Self { path, kind, entry })
    }

    /// The normalised absolute path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the entry includes or excludes its path.
    #[must_use]
    pub const fn kind(&self) -> SelectionKind {
        self.kind
    }

    /// Whether the entry covers a file or a directory subtree.
    #[must_use]
    pub const fn entry(&self) -> EntryKind {
        self.entry
    }

    /// Returns `true` when the entry covers a directory subtree.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.entry.is_directory()
    }

    /// Number of path components below the filesystem root; `/` itself is
    /// depth zero. Specificity ordering in the compiler sorts on this.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.components().count().saturating_sub(1)
    }
}

/// Normalises a raw selection path.
///
/// Rebuilding from components collapses duplicate separators, `.` segments
/// and trailing slashes; `..` segments resolve against the preceding
/// component and clamp at the filesystem root. Resolution is lexical, so
/// a `..` crossing a symlink lands somewhere the kernel would not, but the
/// same holds for the patterns handed to the transfer engine.
pub(crate) fn normalize(raw: &Path) -> Result<PathBuf, SelectionError> {
    if raw.as_os_str().is_empty() {
        return Err(SelectionError::EmptyPath);
    }
    if !raw.is_absolute() {
        return Err(SelectionError::RelativePath(raw.display().to_string()));
    }

    let mut path = PathBuf::new();
    for component in raw.components() {
        match component {
            Component::ParentDir => {
                path.pop();
            }
            other => path.push(other),
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{PathSpec, normalize};
    use crate::{EntryKind, SelectionError, SelectionKind, TypeProbe};
    use std::path::{Path, PathBuf};

    struct FixedProbe(&'static [&'static str]);

    impl TypeProbe for FixedProbe {
        fn is_directory(&self, path: &Path) -> bool {
            self.0.iter().any(|dir| Path::new(dir) == path)
        }
    }

    #[test]
    fn normalisation_strips_trailing_and_duplicate_slashes() {
        assert_eq!(
            normalize(Path::new("/home//user/music/")).unwrap(),
            PathBuf::from("/home/user/music")
        );
        assert_eq!(normalize(Path::new("/")).unwrap(), PathBuf::from("/"));
        assert_eq!(
            normalize(Path::new("/home/./user")).unwrap(),
            PathBuf::from("/home/user")
        );
    }

    #[test]
    fn normalisation_resolves_parent_components() {
        assert_eq!(
            normalize(Path::new("/srv/data/../../etc")).unwrap(),
            PathBuf::from("/etc")
        );
        assert_eq!(
            normalize(Path::new("/a/b/../b")).unwrap(),
            PathBuf::from("/a/b")
        );
        // `..` never climbs above the filesystem root.
        assert_eq!(normalize(Path::new("/../..")).unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn empty_and_relative_paths_are_rejected() {
        assert_eq!(
            PathSpec::file("", SelectionKind::Include),
            Err(SelectionError::EmptyPath)
        );
        assert_eq!(
            PathSpec::file("music", SelectionKind::Include),
            Err(SelectionError::RelativePath("music".into()))
        );
    }

    #[test]
    fn probed_entries_cache_the_classification() {
        let probe = FixedProbe(&["/home/user"]);

        let dir = PathSpec::probed("/home/user", SelectionKind::Include, &probe).unwrap();
        assert_eq!(dir.entry(), EntryKind::Directory);

        let file = PathSpec::probed("/home/user/notes.txt", SelectionKind::Include, &probe).unwrap();
        assert_eq!(file.entry(), EntryKind::File);

        // Entries that do not exist anywhere default to files.
        let missing = PathSpec::probed("/nowhere", SelectionKind::Exclude, &probe).unwrap();
        assert_eq!(missing.entry(), EntryKind::File);
    }

    #[test]
    fn depth_counts_components_below_the_root() {
        let root = PathSpec::directory("/", SelectionKind::Include).unwrap();
        assert_eq!(root.depth(), 0);

        let nested = PathSpec::directory("/a/b/c", SelectionKind::Include).unwrap();
        assert_eq!(nested.depth(), 3);
    }
}
