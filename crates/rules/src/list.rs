use crate::{FilterRule, emit};

/// Ordered rule sequence terminated by the catch-all exclude.
///
/// Order is semantically load-bearing: the engine evaluates rules top to
/// bottom and the first matching rule wins. A `RuleList` is only produced
/// by [`compile`](crate::compile), which guarantees the terminal anchored
/// catch-all; it is recomputed for every backup invocation and never
/// persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuleList {
    rules: Vec<FilterRule>,
}

impl RuleList {
    pub(crate) fn new(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// All rules in evaluation order, catch-all last.
    #[must_use]
    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Number of rules, including the catch-all.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// A compiled list always carries at least the catch-all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterRule> {
        self.rules.iter()
    }

    /// Renders the list as `--include=`/`--exclude=` arguments for the
    /// engine's command line, order preserved verbatim.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        emit::to_args(self)
    }

    /// Renders the list in the engine's filter-file grammar, order
    /// preserved verbatim.
    #[must_use]
    pub fn to_filter_file(&self) -> String {
        emit::to_filter_file(self)
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a FilterRule;
    type IntoIter = std::slice::Iter<'a, FilterRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
