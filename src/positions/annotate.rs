use std::ops::Index;

use crate::parser::ast::{NodeId, NodeKind, PositionSet, SyntaxTree};

/// nullable, firstpos and lastpos of a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub nullable: bool,
    pub firstpos: PositionSet,
    pub lastpos: PositionSet,
}

/// Per-node attributes, indexed by `NodeId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotations {
    attrs: Vec<Attributes>,
}

impl Annotations {
    pub fn annotate(tree: &SyntaxTree) -> Annotations {
        let mut attrs: Vec<Attributes> = Vec::with_capacity(tree.len());

        // arena order is post-order, children are already done
        for (_, kind) in tree.nodes() {
            let node = match *kind {
                NodeKind::Leaf { position, .. } => Attributes {
                    nullable: false,
                    firstpos: PositionSet::from([position]),
                    lastpos: PositionSet::from([position]),
                },
                NodeKind::Union(lhs, rhs) => {
                    let (l, r) = (&attrs[lhs.0], &attrs[rhs.0]);
                    Attributes {
                        nullable: l.nullable || r.nullable,
                        firstpos: &l.firstpos | &r.firstpos,
                        lastpos: &l.lastpos | &r.lastpos,
                    }
                }
                NodeKind::Concat(lhs, rhs) => {
                    let (l, r) = (&attrs[lhs.0], &attrs[rhs.0]);
                    Attributes {
                        nullable: l.nullable && r.nullable,
                        firstpos: match l.nullable {
                            true => &l.firstpos | &r.firstpos,
                            false => l.firstpos.clone(),
                        },
                        lastpos: match r.nullable {
                            true => &l.lastpos | &r.lastpos,
                            false => r.lastpos.clone(),
                        },
                    }
                }
                NodeKind::Star(child) => {
                    let c = &attrs[child.0];
                    Attributes {
                        nullable: true,
                        firstpos: c.firstpos.clone(),
                        lastpos: c.lastpos.clone(),
                    }
                }
            };
            attrs.push(node);
        }

        Annotations { attrs }
    }

    pub fn get(&self, id: NodeId) -> Option<&Attributes> {
        self.attrs.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl Index<NodeId> for Annotations {
    type Output = Attributes;

    fn index(&self, id: NodeId) -> &Attributes {
        &self.attrs[id.0]
    }
}
