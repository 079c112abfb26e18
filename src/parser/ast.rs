use std::collections::BTreeSet;

/// 1-based leaf identifier, assigned in left-to-right order.
pub type Position = usize;

/// Ordered so that iteration is ascending and equal sets compare equal.
pub type PositionSet = BTreeSet<Position>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { symbol: char, position: Position },
    Concat(NodeId, NodeId),
    Union(NodeId, NodeId),
    Star(NodeId),
}

/// Arena of syntax nodes for an augmented pattern `(R)#`.
///
/// Children are always allocated before their parent, so walking the arena
/// in index order visits the tree in post-order and the root is the last
/// node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<NodeKind>,
    pub(crate) symbols: Vec<char>,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeId {
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in post-order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeKind)> + '_ {
        self.nodes.iter().enumerate().map(|(i, kind)| (NodeId(i), kind))
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match *self.node(id) {
            NodeKind::Leaf { .. } => vec![],
            NodeKind::Concat(lhs, rhs) | NodeKind::Union(lhs, rhs) => vec![lhs, rhs],
            NodeKind::Star(child) => vec![child],
        }
    }

    /// Number of leaves, end marker included.
    pub fn position_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        1..=self.symbols.len()
    }

    pub fn symbol(&self, position: Position) -> Option<char> {
        position
            .checked_sub(1)
            .and_then(|i| self.symbols.get(i))
            .copied()
    }

    /// The end marker is always the last leaf.
    pub fn end_marker(&self) -> Position {
        self.symbols.len()
    }
}
