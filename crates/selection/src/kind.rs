use std::fmt;

/// Whether a selection entry keeps or drops the paths it names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectionKind {
    /// The entry names a path to copy into the snapshot.
    Include,
    /// The entry names a path to leave out of the snapshot.
    Exclude,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
        }
    }
}

/// Whether a selection entry covers a whole subtree or a single file.
///
/// An excluded directory is pruned by the engine without any subtree rule,
/// but an included directory needs both a directory rule and a recursive
/// contents rule, so the distinction must be known before compilation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntryKind {
    /// A single filesystem entry.
    File,
    /// A directory and everything beneath it.
    Directory,
}

impl EntryKind {
    /// Returns `true` for [`EntryKind::Directory`].
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryKind, SelectionKind};

    #[test]
    fn display_variants_match_expected_tokens() {
        assert_eq!(SelectionKind::Include.to_string(), "include");
        assert_eq!(SelectionKind::Exclude.to_string(), "exclude");
        assert_eq!(EntryKind::File.to_string(), "file");
        assert_eq!(EntryKind::Directory.to_string(), "directory");
    }

    #[test]
    fn directory_predicate() {
        assert!(EntryKind::Directory.is_directory());
        assert!(!EntryKind::File.is_directory());
    }
}
