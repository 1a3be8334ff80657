//! Best-match selection among full-length candidates.
//!
//! Order of preference:
//! 1. a candidate equal to the query, segment for segment;
//! 2. fewer wildcard segments;
//! 3. the first wildcard further right in the canonical string;
//! 4. on a tie, the next wildcard further right, repeated until one side wins.
//!
//! Positions are character offsets into the comma-joined form, not segment indexes.
//! When both strings run out without a winner the earlier candidate is kept.

use std::cmp::Ordering;

use super::candidate::{MatchCandidate, WILDCARD_CHAR};
use super::query::Query;

/// Picks the best candidate for `query`, or `None` when there are no candidates.
pub fn select_best<'c>(query: &Query, candidates: &'c [MatchCandidate]) -> Option<&'c MatchCandidate> {
    let mut best: Option<&MatchCandidate> = None;
    let mut fewest_wildcards = usize::MAX;
    let mut rightmost_offset: Option<usize> = None;

    for candidate in candidates {
        if candidate.matches_exactly(query) {
            return Some(candidate);
        }

        let wildcards = candidate.wildcard_count();
        let offset = candidate.first_wildcard_offset();

        match wildcards.cmp(&fewest_wildcards) {
            Ordering::Less => {
                fewest_wildcards = wildcards;
                rightmost_offset = offset;
                best = Some(candidate);
            }
            Ordering::Equal => match offset.cmp(&rightmost_offset) {
                Ordering::Greater => {
                    rightmost_offset = offset;
                    best = Some(candidate);
                }
                Ordering::Equal => {
                    if let (Some(current), Some(shared)) = (best, offset) {
                        if challenger_wins_tie(current.canonical(), candidate.canonical(), shared) {
                            best = Some(candidate);
                        }
                    }
                }
                Ordering::Less => {}
            },
            Ordering::Greater => {}
        }
    }

    best
}

/// Breaks a tie between two candidates whose wildcards coincide up to `shared`.
///
/// Compares the next wildcard after the shared position in each string; the one
/// further right wins, and a string with no further wildcard loses to one that has
/// one. Equal positions move both strings past that wildcard and compare again.
fn challenger_wins_tie(current: &str, challenger: &str, shared: usize) -> bool {
    let current: Vec<char> = current.chars().collect();
    let challenger: Vec<char> = challenger.chars().collect();

    let mut left = current.get(shared + 1..).unwrap_or_default();
    let mut right = challenger.get(shared + 1..).unwrap_or_default();

    loop {
        if left.is_empty() && right.is_empty() {
            return false;
        }

        let next_left = wildcard_offset(left);
        let next_right = wildcard_offset(right);
        match next_left.cmp(&next_right) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => match next_left {
                Some(offset) => {
                    left = &left[offset + 1..];
                    right = &right[offset + 1..];
                }
                None => return false,
            },
        }
    }
}

fn wildcard_offset(chars: &[char]) -> Option<usize> {
    chars.iter().position(|&c| c == WILDCARD_CHAR)
}
