use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use super::{State, StateId, Transition};
use crate::config::Config;
use crate::error::{BuildError, Resource};
use crate::parser::ast::{PositionSet, SyntaxTree};
use crate::positions::{Annotations, Followpos};

/// Subset construction over followpos sets.
pub(crate) struct Builder<'a> {
    tree: &'a SyntaxTree,
    followpos: &'a Followpos,
    config: &'a Config,
    states: Vec<State>,
    transitions: Vec<Transition>,
    indexmap: HashMap<PositionSet, StateId>,
}

impl<'a> Builder<'a> {
    pub fn build(
        tree: &'a SyntaxTree,
        annotations: &'a Annotations,
        followpos: &'a Followpos,
        config: &'a Config,
    ) -> Result<(Vec<State>, Vec<Transition>), BuildError> {
        let mut builder = Builder {
            tree,
            followpos,
            config,
            states: Vec::new(),
            transitions: Vec::new(),
            indexmap: HashMap::new(),
        };

        let start = annotations[tree.root()].firstpos.clone();
        builder.build_(start)?;

        debug!(
            "built {} states from {} positions",
            builder.states.len(),
            tree.position_count()
        );

        Ok((builder.states, builder.transitions))
    }

    fn build_(&mut self, start: PositionSet) -> Result<(), BuildError> {
        let mut q = VecDeque::new();
        q.push_back(self.add_state(start)?);

        // states are queued in creation order, so the front is always the
        // lowest-index unfinished state
        let config = self.config;
        while let Some(id) = q.pop_front() {
            let mut trans = Transition::new(config.alphabet.len());

            for (column, symbol) in config.alphabet.iter().enumerate() {
                let next = self.next_positions(id, symbol);
                if next.is_empty() {
                    continue;
                }

                let target = match self.indexmap.get(&next) {
                    Some(&target) => target,
                    None => {
                        let target = self.add_state(next)?;
                        q.push_back(target);
                        target
                    }
                };

                trace!("{} --{}--> {}", id, symbol, target);
                trans.table[column] = Some(target);
            }

            debug_assert_eq!(id, self.transitions.len());
            self.transitions.push(trans);
        }

        Ok(())
    }

    /// Union of followpos(p) for every p of state `id` labelled `symbol`.
    fn next_positions(&self, id: StateId, symbol: char) -> PositionSet {
        let mut next = PositionSet::new();
        for &p in self.states[id].positions.iter() {
            if self.tree.symbol(p) == Some(symbol) {
                next.extend(self.followpos[p].iter().copied());
            }
        }
        next
    }

    fn add_state(&mut self, positions: PositionSet) -> Result<StateId, BuildError> {
        if self.states.len() >= self.config.max_states {
            return Err(BuildError::exhausted(
                Resource::States,
                self.config.max_states,
            ));
        }

        let id = self.states.len();
        let is_final = positions.contains(&self.tree.end_marker());
        debug!("state {}: {:?}{}", id, positions, if is_final { " [final]" } else { "" });

        self.indexmap.insert(positions.clone(), id);
        self.states.push(State {
            positions,
            is_final,
        });
        Ok(id)
    }
}
