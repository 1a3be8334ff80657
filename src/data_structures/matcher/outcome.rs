//! Match outcomes.

use std::fmt;

use serde::Serialize;

use crate::data_structures::pattern_index::Pattern;

/// Sentinel printed for queries without a matching pattern.
pub const NO_MATCH: &str = "NO MATCH";

/// Result of matching one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "pattern", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The best registered pattern for the query
    Matched(Pattern),

    /// No registered pattern matches the query
    NoMatch,
}

impl MatchOutcome {
    /// Returns `true` for [`MatchOutcome::Matched`].
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// The winning pattern, if any.
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Self::Matched(pattern) => Some(pattern),
            Self::NoMatch => None,
        }
    }

    /// Consumes the outcome, returning the winning pattern, if any.
    pub fn into_pattern(self) -> Option<Pattern> {
        match self {
            Self::Matched(pattern) => Some(pattern),
            Self::NoMatch => None,
        }
    }
}

impl From<Option<Pattern>> for MatchOutcome {
    fn from(pattern: Option<Pattern>) -> Self {
        pattern.map_or(Self::NoMatch, Self::Matched)
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched(pattern) => write!(f, "{pattern}"),
            Self::NoMatch => f.write_str(NO_MATCH),
        }
    }
}
