//! Pattern Index Implementation
//!
//! This module provides a trie over pattern segments. Every registered pattern is a
//! path from the root; a prefix of segments is traversed with one edge lookup per
//! segment. Literal edges and the reserved wildcard edge are stored separately so
//! the matcher can ask for either in constant time.
//!
//! Nodes are kept in an arena owned by the index and addressed by [`NodeId`]. The
//! index is built once and then only read, so no locking is needed on the lookup
//! path; see [`SharedPatternMatcher`](crate::data_structures::SharedPatternMatcher)
//! for concurrent registration.

mod error;
mod node;
mod pattern;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::{PatternError, PatternResult};
pub use node::{NodeId, PatternNode};
pub use pattern::{Pattern, Segment, PATTERN_DELIMITER, WILDCARD};

/// Configuration options for the pattern index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternIndexConfig {
    /// Maximum number of segments a registered pattern may have (`None` for unbounded)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Trie of registered patterns.
///
/// Key features:
/// * Idempotent registration
/// * Constant-time exact and wildcard edge lookup per segment
/// * Deterministic enumeration in insertion order
#[derive(Debug)]
pub struct PatternIndex {
    /// Node arena; index 0 is the root
    nodes: Vec<PatternNode>,

    /// Number of registered patterns
    len: usize,

    /// Segment count of the longest registered pattern
    depth: usize,

    /// Configuration options
    config: PatternIndexConfig,
}

impl PatternIndex {
    /// Creates a new empty index with default configuration.
    pub fn new() -> Self {
        Self::with_config(PatternIndexConfig::default())
    }

    /// Creates a new empty index with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the index.
    pub fn with_config(config: PatternIndexConfig) -> Self {
        Self {
            nodes: vec![PatternNode::new()],
            len: 0,
            depth: 0,
            config,
        }
    }

    /// Registers a pattern.
    ///
    /// Each segment reuses the existing edge when there is one, so registering the
    /// same pattern twice leaves the index unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The pattern was new.
    /// * `Ok(false)` - The pattern was already registered.
    /// * `Err(PatternError::TooDeep)` - The pattern exceeds the configured maximum depth.
    pub fn register(&mut self, pattern: &Pattern) -> PatternResult<bool> {
        if let Some(max_depth) = self.config.max_depth {
            if pattern.depth() > max_depth {
                return Err(PatternError::TooDeep {
                    pattern: pattern.to_string(),
                    max_depth,
                });
            }
        }

        let mut node = NodeId::ROOT;
        for segment in pattern.segments() {
            node = self.child_or_insert(node, segment);
        }

        let target = &mut self.nodes[node.0];
        let is_new = !target.terminal;
        if is_new {
            target.terminal = true;
            self.len += 1;
            self.depth = self.depth.max(pattern.depth());
        }

        debug!(pattern = %pattern, is_new, "Registered pattern");
        Ok(is_new)
    }

    /// Parses a comma-separated pattern string and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Empty`] for strings without segments, or
    /// [`PatternError::TooDeep`] as for [`register`](Self::register).
    pub fn register_str(&mut self, source: &str) -> PatternResult<bool> {
        let pattern = Pattern::parse(source)?;
        self.register(&pattern)
    }

    fn child_or_insert(&mut self, node: NodeId, segment: &Segment) -> NodeId {
        let next = NodeId(self.nodes.len());
        let parent = &mut self.nodes[node.0];
        let child = match segment {
            Segment::Wildcard => *parent.wildcard.get_or_insert(next),
            Segment::Literal(token) => *parent.literals.entry(token.clone()).or_insert(next),
        };
        if child == next {
            self.nodes.push(PatternNode::new());
        }
        child
    }

    /// The root node, representing the empty prefix.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Borrows a node, or `None` for an id that does not belong to this index.
    pub fn node(&self, id: NodeId) -> Option<&PatternNode> {
        self.nodes.get(id.index())
    }

    /// Exact-token edge lookup.
    ///
    /// The token `*` resolves to the wildcard edge, so a query segment spelled `*`
    /// follows the wildcard as its exact match.
    pub fn child_for(&self, node: NodeId, token: &str) -> Option<NodeId> {
        let node = self.node(node)?;
        if token == WILDCARD {
            node.wildcard
        } else {
            node.literals.get(token).copied()
        }
    }

    /// Wildcard edge lookup.
    pub fn wildcard_child_for(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.wildcard
    }

    /// Whether a registered pattern ends at `node`.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(PatternNode::is_terminal)
    }

    /// Whether any edge leaves `node`.
    pub fn has_children(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(PatternNode::has_children)
    }

    /// Checks whether exactly this pattern has been registered.
    pub fn contains(&self, pattern: &Pattern) -> bool {
        let mut node = self.root();
        for segment in pattern.segments() {
            match self.child_for(node, segment.as_str()) {
                Some(next) => node = next,
                None => return false,
            }
        }
        self.is_terminal(node)
    }

    /// Returns the number of registered patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if no pattern has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Segment count of the longest registered pattern (0 when empty).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the configuration of this index.
    pub fn config(&self) -> &PatternIndexConfig {
        &self.config
    }

    /// Returns every registered pattern, depth-first in insertion order.
    pub fn patterns(&self) -> Vec<Pattern> {
        let mut result = Vec::with_capacity(self.len);
        let mut prefix: Vec<Segment> = Vec::with_capacity(self.depth);

        // (node, prefix length at that node, segment of the edge leading to it)
        let mut stack: Vec<(NodeId, usize, Option<Segment>)> = vec![(self.root(), 0, None)];
        while let Some((id, depth, segment)) = stack.pop() {
            let Some(current) = self.node(id) else {
                continue;
            };

            prefix.truncate(depth.saturating_sub(1));
            prefix.extend(segment);

            if current.terminal {
                if let Ok(pattern) = Pattern::from_segments(prefix.clone()) {
                    result.push(pattern);
                }
            }

            // Reversed so the first-inserted edge is visited first
            for (token, child) in current.edges().into_iter().rev() {
                let segment = match token {
                    Some(token) => Segment::Literal(token.to_string()),
                    None => Segment::Wildcard,
                };
                stack.push((child, depth + 1, Some(segment)));
            }
        }

        result
    }

    /// Removes every registered pattern.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(PatternNode::new());
        self.len = 0;
        self.depth = 0;
    }
}

impl Default for PatternIndex {
    fn default() -> Self {
        Self::new()
    }
}
