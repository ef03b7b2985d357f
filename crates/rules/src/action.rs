use std::fmt;

/// Action taken when a compiled rule matches a path.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuleAction {
    /// Copy the matching path.
    Include,
    /// Drop the matching path; for directories the engine prunes the
    /// whole subtree.
    Exclude,
}

impl RuleAction {
    /// Sign used by the engine's filter-file grammar.
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Include => '+',
            Self::Exclude => '-',
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
        }
    }
}
