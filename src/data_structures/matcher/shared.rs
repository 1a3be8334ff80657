//! Thread-safe wrapper around [`PatternMatcher`].

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::data_structures::pattern_index::PatternResult;

use super::{MatchOutcome, PatternMatcher};

/// A [`PatternMatcher`] that can be registered into and queried from several threads.
///
/// Registration takes the write lock; queries share the read lock, so a query
/// always sees the index either before or after a whole registration.
#[derive(Debug, Clone, Default)]
pub struct SharedPatternMatcher {
    inner: Arc<RwLock<PatternMatcher>>,
}

impl SharedPatternMatcher {
    /// Creates an empty shared matcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares an already-built matcher.
    pub fn from_matcher(matcher: PatternMatcher) -> Self {
        Self {
            inner: Arc::new(RwLock::new(matcher)),
        }
    }

    /// Registers a comma-separated pattern.
    pub fn register(&self, pattern: &str) -> PatternResult<bool> {
        self.inner.write().register(pattern)
    }

    /// Finds the best pattern for a query path.
    pub fn find_matching_pattern(&self, expression: &str) -> MatchOutcome {
        self.inner.read().find_matching_pattern(expression)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if no pattern has been registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Holds the read lock for a batch of queries.
    pub fn read(&self) -> RwLockReadGuard<'_, PatternMatcher> {
        self.inner.read()
    }
}
