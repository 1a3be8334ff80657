//! Candidate search.
//!
//! Walks the index one query segment at a time. At every node the exact edge is
//! preferred and the wildcard edge is the fallback; afterwards the wildcard edge is
//! also explored as an alternative, so a query segment that equals a literal token
//! can still match through that literal's `*` sibling when the literal path dies out.
//!
//! The set of wildcard positions records where the preferred branch already took
//! the wildcard, which stops the alternative from descending into the same branch a
//! second time. Entries deeper than the position being retried belong to attempts
//! that have already unwound and are discarded before each alternative.
//!
//! The walk is depth-first over an explicit frame stack, so query length is not
//! limited by the thread's stack size.

use std::collections::BTreeSet;

use tracing::trace;

use crate::data_structures::pattern_index::{NodeId, Pattern, PatternIndex, Segment};

use super::candidate::MatchCandidate;
use super::query::Query;

/// What a frame does the next time it is on top of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Preferred,
    Alternative,
    Done,
}

/// One node visit: the index node reached after `position` query segments.
#[derive(Debug)]
struct Frame {
    node: NodeId,
    position: usize,
    stage: Stage,
    preferred: Option<NodeId>,
}

impl Frame {
    fn new(node: NodeId, position: usize) -> Self {
        Self {
            node,
            position,
            stage: Stage::Preferred,
            preferred: None,
        }
    }
}

/// Mutable state of one search. Never shared between queries.
#[derive(Debug)]
pub(crate) struct SearchContext<'a> {
    index: &'a PatternIndex,
    query: &'a Query,
    fragment: Vec<Segment>,
    candidates: Vec<MatchCandidate>,
    wildcard_positions: BTreeSet<usize>,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(index: &'a PatternIndex, query: &'a Query) -> Self {
        Self {
            index,
            query,
            fragment: Vec::with_capacity(query.len()),
            candidates: Vec::new(),
            wildcard_positions: BTreeSet::new(),
        }
    }

    /// Runs the search and returns the distinct full-length candidates in discovery order.
    pub(crate) fn run(mut self) -> Vec<MatchCandidate> {
        let mut stack = Vec::with_capacity(self.query.len() + 1);
        stack.push(Frame::new(self.index.root(), 0));

        while let Some(frame) = stack.last_mut() {
            let next = match frame.stage {
                Stage::Preferred => {
                    let next = self.preferred(frame);
                    // A dead end here skips the alternative as well
                    frame.stage = if next.is_some() {
                        Stage::Alternative
                    } else {
                        Stage::Done
                    };
                    next
                }
                Stage::Alternative => {
                    frame.stage = Stage::Done;
                    self.alternative(frame)
                }
                Stage::Done => None,
            };

            if let Some((child, segment)) = next {
                let position = frame.position + 1;
                self.fragment.push(segment);
                stack.push(Frame::new(child, position));
            } else {
                // The root frame has no segment in the fragment
                if frame.position > 0 {
                    self.fragment.pop();
                }
                stack.pop();
            }
        }

        trace!(
            query_len = self.query.len(),
            candidates = self.candidates.len(),
            "Search finished"
        );
        self.candidates
    }

    /// Picks the exact edge, else the wildcard edge. Records a candidate when the
    /// query is exhausted at a terminal node.
    fn preferred(&mut self, frame: &mut Frame) -> Option<(NodeId, Segment)> {
        let query = self.query;
        let Some(segment) = query.segment(frame.position) else {
            if self.index.is_terminal(frame.node) {
                self.record();
            }
            return None;
        };

        if let Some(child) = self.index.child_for(frame.node, segment) {
            frame.preferred = Some(child);
            return Some((child, Segment::parse(segment)));
        }

        let child = self.index.wildcard_child_for(frame.node)?;
        self.wildcard_positions.insert(frame.position);
        frame.preferred = Some(child);
        Some((child, Segment::Wildcard))
    }

    /// Retries the wildcard edge once the preferred branch has unwound.
    fn alternative(&mut self, frame: &Frame) -> Option<(NodeId, Segment)> {
        let wildcard = self.index.wildcard_child_for(frame.node)?;

        // A query segment spelled `*` already took this edge as its exact match
        if frame.preferred == Some(wildcard)
            || !self.index.has_children(wildcard)
            || self.wildcard_positions.contains(&frame.position)
        {
            return None;
        }

        self.wildcard_positions.retain(|&p| p <= frame.position);
        Some((wildcard, Segment::Wildcard))
    }

    fn record(&mut self) {
        let Ok(pattern) = Pattern::from_segments(self.fragment.clone()) else {
            return;
        };
        let candidate = MatchCandidate::new(pattern);
        if !self.candidates.contains(&candidate) {
            self.candidates.push(candidate);
        }
    }
}
