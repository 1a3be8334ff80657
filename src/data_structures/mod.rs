//! Data structures for wildpath.
//!
//! This module contains the pattern index (a trie over pattern segments) and the
//! matcher that searches it for the best pattern for a query path.
//! The index is built once and read-only afterwards; queries keep all their
//! mutable search state local, so any number of them can run side by side.

pub mod matcher;
pub mod pattern_index;

// Re-export common data structures
pub use matcher::{MatchOutcome, PatternMatcher, SharedPatternMatcher, NO_MATCH};
pub use pattern_index::{Pattern, PatternError, PatternIndex, PatternIndexConfig, PatternResult};
