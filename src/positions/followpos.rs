use std::ops::Index;

use super::annotate::Annotations;
use crate::parser::ast::{NodeKind, Position, PositionSet, SyntaxTree};

/// followpos of every position of a tree, built once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Followpos {
    table: Vec<PositionSet>,
}

impl Followpos {
    pub fn build(tree: &SyntaxTree, annotations: &Annotations) -> Followpos {
        let mut table = vec![PositionSet::new(); tree.position_count()];

        for (id, kind) in tree.nodes() {
            let (from, to) = match *kind {
                NodeKind::Concat(lhs, rhs) => {
                    (&annotations[lhs].lastpos, &annotations[rhs].firstpos)
                }
                NodeKind::Star(_) => (&annotations[id].lastpos, &annotations[id].firstpos),
                _ => continue,
            };

            for p in from.iter() {
                table[p - 1].extend(to.iter().copied());
            }
        }

        Followpos { table }
    }

    pub fn get(&self, position: Position) -> Option<&PositionSet> {
        position.checked_sub(1).and_then(|i| self.table.get(i))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Positions in ascending order with their followpos sets.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &PositionSet)> + '_ {
        self.table.iter().enumerate().map(|(i, set)| (i + 1, set))
    }
}

impl Index<Position> for Followpos {
    type Output = PositionSet;

    fn index(&self, position: Position) -> &PositionSet {
        match self.get(position) {
            Some(set) => set,
            None => panic!(
                "position {} out of range 1..={}",
                position,
                self.table.len()
            ),
        }
    }
}
