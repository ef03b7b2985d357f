use std::path::Path;

/// Filesystem collaborator that classifies a selection path.
///
/// The compiler needs exactly one question answered about the filesystem, so
/// the seam is kept this narrow. Production code uses [`FsProbe`]; tests
/// substitute a fixed table and never touch the disk.
pub trait TypeProbe {
    /// Returns `true` when `path` names an existing directory.
    ///
    /// Paths that do not exist are reported as `false`: an unknown entry is
    /// treated as a plain file unless the caller states otherwise.
    fn is_directory(&self, path: &Path) -> bool;
}

/// Production [`TypeProbe`] backed by a `stat` call.
///
/// Symlinks are followed, matching the behaviour of the surrounding
/// application when users add selection entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsProbe;

impl TypeProbe for FsProbe {
    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::{FsProbe, TypeProbe};
    use std::fs::File;

    #[test]
    fn classifies_directories_files_and_missing_paths() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file_path = dir.path().join("entry.txt");
        File::create(&file_path).expect("create file");

        let probe = FsProbe;
        assert!(probe.is_directory(dir.path()));
        assert!(!probe.is_directory(&file_path));
        assert!(!probe.is_directory(&dir.path().join("missing")));
    }
}
