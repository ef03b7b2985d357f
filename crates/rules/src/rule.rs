use crate::RuleAction;

/// One ordered filter rule handed to the transfer engine.
///
/// `pattern` is a path-prefix pattern relative to the transfer root. An
/// anchored rule renders with a leading `/` so the engine matches it from
/// the root rather than at any depth. Directory-only rules carry a trailing
/// `/` and whole-subtree rules a trailing `/**`; both markers live in the
/// pattern text itself, matching the engine's grammar.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterRule {
    action: RuleAction,
    pattern: String,
    anchored: bool,
}

impl FilterRule {
    /// Creates an include rule for `pattern`.
    #[must_use]
    pub fn include(pattern: impl Into<String>) -> Self {
        Self {
            action: RuleAction::Include,
            pattern: pattern.into(),
            anchored: false,
        }
    }

    /// Creates an exclude rule for `pattern`.
    #[must_use]
    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self {
            action: RuleAction::Exclude,
            pattern: pattern.into(),
            anchored: false,
        }
    }

    /// Anchors the rule at the transfer root.
    #[must_use]
    pub const fn anchored(mut self) -> Self {
        self.anchored = true;
        self
    }

    /// Returns the rule action.
    #[must_use]
    pub const fn action(&self) -> RuleAction {
        self.action
    }

    /// Returns the pattern text relative to the transfer root.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns whether the pattern must match from the transfer root.
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Returns whether the rule applies to directories only.
    #[must_use]
    pub fn is_directory_only(&self) -> bool {
        self.pattern.ends_with('/')
    }

    /// Renders the pattern the way the engine parses it, with a leading
    /// `/` when the rule is anchored.
    #[must_use]
    pub fn render(&self) -> String {
        if self.anchored {
            format!("/{}", self.pattern)
        } else {
            self.pattern.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterRule;
    use crate::RuleAction;

    #[test]
    fn constructors_set_action_and_pattern() {
        let rule = FilterRule::include("a/b/**");
        assert_eq!(rule.action(), RuleAction::Include);
        assert_eq!(rule.pattern(), "a/b/**");
        assert!(!rule.is_anchored());
    }

    #[test]
    fn anchored_rules_render_with_a_leading_slash() {
        let rule = FilterRule::exclude("a/b").anchored();
        assert!(rule.is_anchored());
        assert_eq!(rule.render(), "/a/b");

        let free = FilterRule::exclude("a/b");
        assert_eq!(free.render(), "a/b");
    }

    #[test]
    fn trailing_slash_marks_directory_only_rules() {
        assert!(FilterRule::include("a/").is_directory_only());
        assert!(!FilterRule::include("a").is_directory_only());
        assert!(!FilterRule::include("a/**").is_directory_only());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rules_round_trip_through_json() {
        let rule = FilterRule::exclude("a/b/**").anchored();
        let json = serde_json::to_string(&rule).expect("serialize");
        let back: FilterRule = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, rule);
    }
}
