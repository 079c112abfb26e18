//! Read-only snapshots of a built automaton, for rendering outside the
//! crate. Every list of positions is in ascending order.

use serde::Serialize;

use crate::dfa::{Automaton, StateId};
use crate::parser::ast::{NodeKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeLabel {
    Leaf,
    Concat,
    Union,
    Star,
}

/// One node of the syntax-tree dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    pub depth: usize,
    pub label: NodeLabel,
    pub symbol: Option<char>,
    pub position: Option<Position>,
    pub nullable: bool,
    pub firstpos: Vec<Position>,
    pub lastpos: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowposRow {
    pub position: Position,
    pub symbol: char,
    pub followpos: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateRow {
    pub state: StateId,
    pub positions: Vec<Position>,
    pub is_final: bool,
}

/// Transition function as a grid. Only symbols with at least one
/// transition get a column; `rows[state][column]` is the target state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    pub symbols: Vec<char>,
    pub rows: Vec<Vec<Option<StateId>>>,
}

impl Automaton {
    /// The augmented syntax tree in pre-order, root at depth 0.
    pub fn tree_dump(&self) -> Vec<TreeRow> {
        let tree = self.tree();
        let mut rows = Vec::with_capacity(tree.len());

        let mut stack = vec![(tree.root(), 0)];
        while let Some((id, depth)) = stack.pop() {
            let attrs = &self.annotations()[id];
            let (label, symbol, position) = match *tree.node(id) {
                NodeKind::Leaf { symbol, position } => {
                    (NodeLabel::Leaf, Some(symbol), Some(position))
                }
                NodeKind::Concat(_, _) => (NodeLabel::Concat, None, None),
                NodeKind::Union(_, _) => (NodeLabel::Union, None, None),
                NodeKind::Star(_) => (NodeLabel::Star, None, None),
            };

            rows.push(TreeRow {
                depth,
                label,
                symbol,
                position,
                nullable: attrs.nullable,
                firstpos: attrs.firstpos.iter().copied().collect(),
                lastpos: attrs.lastpos.iter().copied().collect(),
            });

            // left child on top
            for child in tree.children(id).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        rows
    }

    pub fn followpos_table(&self) -> Vec<FollowposRow> {
        self.followpos()
            .iter()
            .filter_map(|(position, set)| {
                Some(FollowposRow {
                    position,
                    symbol: self.tree().symbol(position)?,
                    followpos: set.iter().copied().collect(),
                })
            })
            .collect()
    }

    pub fn state_table(&self) -> Vec<StateRow> {
        self.states()
            .iter()
            .enumerate()
            .map(|(state, s)| StateRow {
                state,
                positions: s.positions().iter().copied().collect(),
                is_final: s.is_final(),
            })
            .collect()
    }

    pub fn transition_table(&self) -> TransitionTable {
        let symbols: Vec<char> = self
            .alphabet()
            .iter()
            .filter(|&c| (0..self.len()).any(|s| self.transition(s, c).is_some()))
            .collect();

        let rows: Vec<Vec<Option<StateId>>> = (0..self.len())
            .map(|s| symbols.iter().map(|&c| self.transition(s, c)).collect())
            .collect();

        TransitionTable { symbols, rows }
    }
}
