//! Best-match lookup of query paths against registered patterns.
//!
//! A query such as `/a/b/c/` is split into segments and searched against the
//! [`PatternIndex`]. Every registered pattern with the query's segment count whose
//! segments are each equal to the query segment or `*` is a candidate; the single
//! best candidate is chosen by:
//!
//! - an exact, wildcard-free match beating everything;
//! - fewer wildcards beating more;
//! - among equal wildcard counts, literal matching that extends further right.
//!
//! # Example
//!
//! ```
//! use wildpath_lib::data_structures::matcher::{MatchOutcome, PatternMatcher};
//!
//! let mut matcher = PatternMatcher::new();
//! for pattern in ["*,x,y,z", "a,*,*", "foo,bar,baz"] {
//!     matcher.register(pattern).unwrap();
//! }
//!
//! assert_eq!(matcher.match_expression("/w/x/y/z/"), "*,x,y,z");
//! assert_eq!(matcher.match_expression("a/b/c"), "a,*,*");
//! assert_eq!(matcher.find_matching_pattern("foo/bar/"), MatchOutcome::NoMatch);
//! ```

mod candidate;
mod outcome;
mod query;
mod search;
mod selection;
mod shared;

#[cfg(test)]
mod tests;

use std::thread;

use tracing::debug;

use crate::data_structures::pattern_index::{
    Pattern, PatternIndex, PatternIndexConfig, PatternResult,
};

pub use candidate::MatchCandidate;
pub use outcome::{MatchOutcome, NO_MATCH};
pub use query::{Query, PATH_DELIMITER};
pub use selection::select_best;
pub use shared::SharedPatternMatcher;

use search::SearchContext;

/// Matches query paths against a [`PatternIndex`].
#[derive(Debug, Default)]
pub struct PatternMatcher {
    index: PatternIndex,
}

impl PatternMatcher {
    /// Creates a matcher over an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher over an empty index with the given configuration.
    pub fn with_config(config: PatternIndexConfig) -> Self {
        Self::with_index(PatternIndex::with_config(config))
    }

    /// Creates a matcher over an existing index.
    pub fn with_index(index: PatternIndex) -> Self {
        Self { index }
    }

    /// Registers a comma-separated pattern such as `a,*,c`.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the pattern was new.
    /// * `Err(PatternError)` - If the pattern is empty or too deep for the index.
    pub fn register(&mut self, pattern: &str) -> PatternResult<bool> {
        self.index.register_str(pattern)
    }

    /// Registers an already-parsed pattern.
    pub fn register_pattern(&mut self, pattern: &Pattern) -> PatternResult<bool> {
        self.index.register(pattern)
    }

    /// The underlying index.
    pub fn index(&self) -> &PatternIndex {
        &self.index
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Checks if no pattern has been registered.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns every registered pattern matching `query` over its full length, in
    /// discovery order.
    pub fn find_candidates(&self, query: &Query) -> Vec<MatchCandidate> {
        // Nothing registered is long enough
        if query.len() > self.index.depth() {
            return Vec::new();
        }
        SearchContext::new(&self.index, query).run()
    }

    /// Finds the best registered pattern for a slash-delimited query path.
    ///
    /// Empty paths and paths without a matching pattern yield [`MatchOutcome::NoMatch`].
    pub fn find_matching_pattern(&self, expression: &str) -> MatchOutcome {
        let Some(query) = Query::parse(expression) else {
            debug!(expression, "Query has no segments");
            return MatchOutcome::NoMatch;
        };

        let candidates = self.find_candidates(&query);
        let outcome: MatchOutcome = select_best(&query, &candidates)
            .map(|candidate| candidate.pattern().clone())
            .into();

        debug!(
            expression,
            candidates = candidates.len(),
            outcome = %outcome,
            "Matched query"
        );
        outcome
    }

    /// Matches a query path and renders the result: the winning pattern in its
    /// comma-joined form, or [`NO_MATCH`].
    pub fn match_expression(&self, expression: &str) -> String {
        self.find_matching_pattern(expression).to_string()
    }

    /// Matches a batch of query paths on up to `workers` threads.
    ///
    /// The index is only read, so workers share it without locking. Outcomes are
    /// returned in the order of `expressions`.
    pub fn match_all<S>(&self, expressions: &[S], workers: usize) -> Vec<MatchOutcome>
    where
        S: AsRef<str> + Sync,
    {
        let workers = workers.clamp(1, expressions.len().max(1));
        if workers == 1 {
            return expressions
                .iter()
                .map(|expression| self.find_matching_pattern(expression.as_ref()))
                .collect();
        }

        let chunk_size = expressions.len().div_ceil(workers);
        debug!(queries = expressions.len(), workers, chunk_size, "Matching batch");

        thread::scope(|scope| {
            let handles: Vec<_> = expressions
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|expression| self.find_matching_pattern(expression.as_ref()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }
}
