//! Wildpath Library
//!
//! Finds, for a slash-separated path, the best of a set of registered comma-separated
//! patterns in which `*` stands for any single segment. When several patterns fit,
//! the one with the fewest wildcards wins, and among those the one whose leftmost
//! wildcard sits furthest to the right.
//!
//! # Architecture
//!
//! - [`data_structures::pattern_index`] stores patterns in a segment trie
//! - [`data_structures::matcher`] searches the trie and ranks candidates
//! - [`io`] reads the count-prefixed batch format and writes the report
//! - [`config`] and [`error`] carry settings and failures between them

pub mod config;
pub mod data_structures;
pub mod error;
pub mod io;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use config::WildpathConfig;
pub use data_structures::{MatchOutcome, Pattern, PatternMatcher, SharedPatternMatcher, NO_MATCH};
pub use error::{WildpathError, WildpathResult};

/// Version information for wildpath.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
