use std::path::PathBuf;

use thiserror::Error;

/// Errors reported while building or validating a selection.
///
/// Every variant is a deterministic function of the input: retrying without
/// changing the selection reproduces the same error, so nothing here is ever
/// retried or silently resolved.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SelectionError {
    /// A selection entry was the empty string.
    #[error("selection path is empty")]
    EmptyPath,

    /// A selection entry was not an absolute path.
    #[error("selection path is not absolute: {0}")]
    RelativePath(String),

    /// A selection entry does not live under the transfer root.
    #[error("selection path is outside the transfer root {}: {}", .root.display(), .path.display())]
    OutsideRoot {
        /// The transfer root the set is anchored at.
        root: PathBuf,
        /// The offending selection path.
        path: PathBuf,
    },

    /// The same normalised path appears as both an include and an exclude.
    ///
    /// The message form is fixed: the surrounding application surfaces it
    /// verbatim so the user can correct their configuration.
    #[error("a path is both included and excluded: {}", .0.display())]
    Conflict(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::SelectionError;
    use std::path::PathBuf;

    #[test]
    fn conflict_message_names_the_offending_path() {
        let error = SelectionError::Conflict(PathBuf::from("/home/user/music"));
        assert_eq!(
            error.to_string(),
            "a path is both included and excluded: /home/user/music"
        );
    }

    #[test]
    fn validation_messages_name_the_input() {
        let error = SelectionError::RelativePath("music".into());
        assert_eq!(error.to_string(), "selection path is not absolute: music");

        let error = SelectionError::OutsideRoot {
            root: PathBuf::from("/srv"),
            path: PathBuf::from("/home/user"),
        };
        assert_eq!(
            error.to_string(),
            "selection path is outside the transfer root /srv: /home/user"
        );
    }
}
