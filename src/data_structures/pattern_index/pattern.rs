//! Pattern and segment types.
//!
//! A pattern is a non-empty sequence of segments registered from a comma-separated
//! string such as `a,*,c`. Each segment is either a literal token or the wildcard
//! `*`, which stands for exactly one whole path segment.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::{PatternError, PatternResult};

/// The reserved wildcard token.
pub const WILDCARD: &str = "*";

/// Delimiter between the segments of a registered pattern.
pub const PATTERN_DELIMITER: char = ',';

/// A single segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A literal token that must equal the query segment.
    Literal(String),

    /// The wildcard, matching any single query segment.
    Wildcard,
}

impl Segment {
    /// Parses a token; only the exact token `*` is a wildcard.
    pub fn parse(token: &str) -> Self {
        if token == WILDCARD {
            Self::Wildcard
        } else {
            Self::Literal(token.to_string())
        }
    }

    /// Returns `true` for the wildcard segment.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Returns the token as it appears in the canonical pattern form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(token) => token,
            Self::Wildcard => WILDCARD,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered pattern: an ordered, non-empty sequence of segments.
///
/// The canonical form (see [`fmt::Display`]) joins the segments with `,`, which is
/// also the form reported back to callers when the pattern wins a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a comma-separated pattern string.
    ///
    /// Trailing empty tokens are discarded, so `a,b,` is the two-segment pattern `a,b`.
    /// Leading and interior empty tokens are kept as empty literals.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Empty`] if the string yields no segments.
    pub fn parse(source: &str) -> PatternResult<Self> {
        let mut tokens: Vec<&str> = source.split(PATTERN_DELIMITER).collect();
        while tokens.last().is_some_and(|token| token.is_empty()) {
            tokens.pop();
        }

        Self::from_segments(tokens.into_iter().map(Segment::parse).collect())
    }

    /// Builds a pattern from already-parsed segments.
    ///
    /// A `Literal("*")` is normalised to [`Segment::Wildcard`]: the token is reserved.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Empty`] if `segments` is empty.
    pub fn from_segments(segments: Vec<Segment>) -> PatternResult<Self> {
        if segments.is_empty() {
            return Err(PatternError::Empty);
        }
        let segments = segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal(token) if token == WILDCARD => Segment::Wildcard,
                other => other,
            })
            .collect();
        Ok(Self { segments })
    }

    /// The segments of this pattern, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Number of wildcard segments.
    pub fn wildcard_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_wildcard()).count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATTERN_DELIMITER}")?;
            }
            f.write_str(segment.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
