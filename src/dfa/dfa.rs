use log::debug;

use super::{builder::Builder, simulator::Simulator, Outcome, Trace};
use crate::config::{Alphabet, Config};
use crate::error::BuildError;
use crate::parser::ast::PositionSet;
use crate::parser::{Parser, SyntaxTree};
use crate::positions::{Annotations, Followpos};

/// Dense state index in creation order; the start state is 0.
pub type StateId = usize;

/// A DFA built directly from a pattern, together with the intermediate
/// structures it was derived from. Immutable once built.
#[derive(Debug, Clone)]
pub struct Automaton {
    pattern: String,
    alphabet: Alphabet,
    tree: SyntaxTree,
    annotations: Annotations,
    followpos: Followpos,
    pub(crate) states: Vec<State>,
    pub(crate) transitions: Vec<Transition>,
}

/// Builds an automaton for `pattern` over the symbols it mentions, with the
/// default capacities.
pub fn build_automaton(pattern: &str) -> Result<Automaton, BuildError> {
    Automaton::new(pattern)
}

impl Automaton {
    /// The alphabet is exactly the set of symbols in `pattern`; any other
    /// input character is rejected as an invalid symbol.
    pub fn new(pattern: &str) -> Result<Automaton, BuildError> {
        Automaton::with_config(pattern, &Config::for_pattern(pattern))
    }

    pub fn with_config(pattern: &str, config: &Config) -> Result<Automaton, BuildError> {
        let tree = Parser::parse(pattern, config)?;
        let annotations = Annotations::annotate(&tree);
        let followpos = Followpos::build(&tree, &annotations);
        let (states, transitions) = Builder::build(&tree, &annotations, &followpos, config)?;

        debug!(
            "automaton for {:?}: {} states over {} symbols",
            pattern,
            states.len(),
            config.alphabet.len()
        );

        Ok(Automaton {
            pattern: pattern.to_owned(),
            alphabet: config.alphabet.clone(),
            tree,
            annotations,
            followpos,
            states,
            transitions,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern as the tree sees it, `(pattern)#`.
    pub fn augmented_pattern(&self) -> String {
        format!("({})#", self.pattern)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn followpos(&self) -> &Followpos {
        &self.followpos
    }

    pub fn start(&self) -> StateId {
        0
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    pub fn transition(&self, state: StateId, symbol: char) -> Option<StateId> {
        let column = self.alphabet.index_of(symbol)?;
        self.transitions.get(state)?.table[column]
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.states.get(state).map_or(false, |s| s.is_final)
    }

    pub fn simulate(&self, input: &str) -> Outcome {
        Simulator::new(self).execute(input)
    }

    /// Like `simulate`, also returning every state visited.
    pub fn trace(&self, input: &str) -> Trace {
        let mut simulator = Simulator::new(self);
        let outcome = simulator.execute(input);
        simulator.into_trace(outcome)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub(crate) positions: PositionSet,
    pub(crate) is_final: bool,
}

impl State {
    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

/// Outgoing edges of one state, one column per alphabet symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    pub table: Vec<Option<StateId>>,
}

impl Transition {
    pub fn new(size: usize) -> Self {
        Transition {
            table: vec![None; size],
        }
    }
}
