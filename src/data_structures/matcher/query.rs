//! Query parsing.

/// Delimiter between the segments of a query path.
pub const PATH_DELIMITER: char = '/';

/// A segmented query path.
///
/// Built from strings such as `/w/x/y/z/` or `foo/bar`: one leading `/` is
/// stripped, the rest is split on `/`, and trailing empty segments are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    segments: Vec<String>,
}

impl Query {
    /// Parses a query path.
    ///
    /// Returns `None` when the path has no segments (`""`, `"/"`, `"//"`), which
    /// callers report as no match.
    pub fn parse(expression: &str) -> Option<Self> {
        let path = expression.strip_prefix(PATH_DELIMITER).unwrap_or(expression);

        let mut segments: Vec<String> = path.split(PATH_DELIMITER).map(str::to_string).collect();
        while segments.last().is_some_and(String::is_empty) {
            segments.pop();
        }

        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// The segments of this query, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segment at `position`.
    pub fn segment(&self, position: usize) -> Option<&str> {
        self.segments.get(position).map(String::as_str)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; a parsed query has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
