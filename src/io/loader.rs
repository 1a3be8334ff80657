//! Reader for the count-prefixed pattern and query stream.
//!
//! The stream is a sequence of whitespace-separated tokens: a pattern count, that
//! many patterns, a query count, then that many queries. Line breaks carry no
//! meaning beyond separating tokens.

use std::io::Read;
use std::str::SplitWhitespace;

use fnv::FnvHashSet;
use tracing::debug;

use crate::error::input::{InputError, InputResult, InputSection};

/// Patterns and queries read from one input stream, in stream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchInput {
    /// Raw pattern strings
    pub patterns: Vec<String>,
    /// Raw query paths
    pub queries: Vec<String>,
}

impl MatchInput {
    /// Returns the queries with repeats removed, keeping the first occurrence of each.
    pub fn unique_queries(&self) -> Vec<&str> {
        let mut seen = FnvHashSet::default();
        self.queries
            .iter()
            .map(String::as_str)
            .filter(|query| seen.insert(*query))
            .collect()
    }
}

/// Parses a complete input document.
///
/// # Arguments
///
/// * `input` - The full text of the stream
///
/// # Returns
///
/// * `Ok(MatchInput)` - Both blocks were read completely
/// * `Err(InputError)` - A count is missing or malformed, or a block is short
pub fn parse_input(input: &str) -> InputResult<MatchInput> {
    let mut tokens = input.split_whitespace();

    let patterns = read_block(&mut tokens, InputSection::Patterns)?;
    let queries = read_block(&mut tokens, InputSection::Queries)?;

    let trailing = tokens.count();
    if trailing > 0 {
        debug!(trailing, "Ignoring tokens after the last query");
    }

    Ok(MatchInput { patterns, queries })
}

/// Reads a complete input stream and parses it.
pub fn read_input<R: Read>(mut reader: R) -> InputResult<MatchInput> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_input(&buffer)
}

fn read_block(tokens: &mut SplitWhitespace<'_>, section: InputSection) -> InputResult<Vec<String>> {
    let count_token = tokens.next().ok_or(InputError::MissingCount { section })?;
    let expected: usize = count_token
        .parse()
        .map_err(|_| InputError::InvalidCount {
            section,
            token: count_token.to_string(),
        })?;

    let entries: Vec<String> = tokens.take(expected).map(str::to_string).collect();
    if entries.len() < expected {
        return Err(InputError::Truncated {
            section,
            expected,
            found: entries.len(),
        });
    }
    Ok(entries)
}
