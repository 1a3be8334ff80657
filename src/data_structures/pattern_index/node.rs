//! Node implementation for the pattern index.
//!
//! Nodes live in the index's arena and refer to their children by [`NodeId`].
//! Each node represents one prefix of segments; terminal nodes mark the end of a
//! registered pattern.

use fnv::FnvHashMap;

/// Handle to a node inside a [`PatternIndex`](super::PatternIndex).
///
/// Ids are allocated in creation order, so comparing ids compares insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub(super) const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the pattern index.
#[derive(Debug, Default)]
pub struct PatternNode {
    /// Literal-token edges
    pub(super) literals: FnvHashMap<String, NodeId>,

    /// The reserved wildcard edge, kept apart from the literals
    pub(super) wildcard: Option<NodeId>,

    /// Whether a registered pattern ends at this node
    pub(super) terminal: bool,
}

impl PatternNode {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a registered pattern ends exactly here.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether any edge leaves this node.
    pub fn has_children(&self) -> bool {
        self.wildcard.is_some() || !self.literals.is_empty()
    }

    /// Number of outgoing edges, wildcard included.
    pub fn child_count(&self) -> usize {
        self.literals.len() + usize::from(self.wildcard.is_some())
    }

    /// Outgoing edges as `(token, child)` in insertion order.
    ///
    /// The wildcard edge reports `None` as its token.
    pub fn edges(&self) -> Vec<(Option<&str>, NodeId)> {
        let mut edges: Vec<(Option<&str>, NodeId)> = self
            .literals
            .iter()
            .map(|(token, &id)| (Some(token.as_str()), id))
            .collect();
        if let Some(id) = self.wildcard {
            edges.push((None, id));
        }
        edges.sort_by_key(|&(_, id)| id);
        edges
    }
}
