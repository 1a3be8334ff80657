//! Completed match candidates.

use crate::data_structures::pattern_index::Pattern;

use super::query::Query;

/// The wildcard as it appears in canonical pattern strings.
pub(crate) const WILDCARD_CHAR: char = '*';

/// A registered pattern that matches a query over its full length.
///
/// Tie-breaking works on the canonical comma-joined string, so it is computed once
/// and cached alongside the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pattern: Pattern,
    canonical: String,
}

impl MatchCandidate {
    /// Wraps a pattern.
    pub fn new(pattern: Pattern) -> Self {
        let canonical = pattern.to_string();
        Self { pattern, canonical }
    }

    /// The matching pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Canonical comma-joined form.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Number of wildcard segments.
    pub fn wildcard_count(&self) -> usize {
        self.pattern.wildcard_count()
    }

    /// Character offset of the first `*` in the canonical form.
    ///
    /// This is a position in the string, not a segment index: a literal token
    /// containing `*` counts, and longer tokens push the offset right.
    pub fn first_wildcard_offset(&self) -> Option<usize> {
        self.canonical.chars().position(|c| c == WILDCARD_CHAR)
    }

    /// Whether every segment equals the query segment at the same position.
    pub fn matches_exactly(&self, query: &Query) -> bool {
        self.pattern
            .segments()
            .iter()
            .map(|segment| segment.as_str())
            .eq(query.segments().iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(source: &str) -> MatchCandidate {
        MatchCandidate::new(Pattern::parse(source).unwrap())
    }

    #[test]
    fn test_wildcard_metrics() {
        let c = candidate("a,*,*");
        assert_eq!(c.canonical(), "a,*,*");
        assert_eq!(c.wildcard_count(), 2);
        assert_eq!(c.first_wildcard_offset(), Some(2));

        let c = candidate("foo,bar,baz");
        assert_eq!(c.wildcard_count(), 0);
        assert_eq!(c.first_wildcard_offset(), None);
    }

    #[test]
    fn test_offset_counts_characters() {
        // Longer literal tokens push the first wildcard further right
        assert_eq!(candidate("alpha,*").first_wildcard_offset(), Some(6));
        assert_eq!(candidate("é,*").first_wildcard_offset(), Some(2));
        // A literal containing `*` still moves the offset
        assert_eq!(candidate("a*b,c,*").first_wildcard_offset(), Some(1));
    }

    #[test]
    fn test_matches_exactly() {
        let query = Query::parse("/foo/bar/baz/").unwrap();
        assert!(candidate("foo,bar,baz").matches_exactly(&query));
        assert!(!candidate("foo,*,baz").matches_exactly(&query));
        assert!(!candidate("foo,bar").matches_exactly(&query));

        // A literal `*` query segment is matched exactly by the wildcard
        let query = Query::parse("a/*").unwrap();
        assert!(candidate("a,*").matches_exactly(&query));
    }
}
