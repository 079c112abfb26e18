use log::trace;
use serde::Serialize;

use super::{Automaton, StateId};

/// Result of running an input against an automaton. Always one or the
/// other, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    /// The character is not in the alphabet.
    InvalidSymbol(char),
    /// No transition from the state on the character.
    NoTransition(StateId, char),
    /// The whole input was consumed in a non-final state.
    NotAccepting,
}

/// The states visited while simulating an input, start state first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub states: Vec<StateId>,
    pub outcome: Outcome,
}

pub(crate) struct Simulator<'a> {
    automaton: &'a Automaton,
    visited: Vec<StateId>,
}

impl<'a> Simulator<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Simulator {
            automaton,
            visited: Vec::new(),
        }
    }

    pub fn execute(&mut self, input: &str) -> Outcome {
        let mut state = self.automaton.start();
        self.visited.push(state);

        for c in input.chars() {
            if !self.automaton.alphabet().contains(c) {
                trace!("{}: invalid symbol {:?}", state, c);
                return Outcome::Rejected(Rejection::InvalidSymbol(c));
            }

            match self.automaton.transition(state, c) {
                Some(next) => {
                    trace!("{} --{}--> {}", state, c, next);
                    state = next;
                    self.visited.push(state);
                }
                None => {
                    trace!("{}: no transition on {:?}", state, c);
                    return Outcome::Rejected(Rejection::NoTransition(state, c));
                }
            }
        }

        match self.automaton.is_final(state) {
            true => Outcome::Accepted,
            false => Outcome::Rejected(Rejection::NotAccepting),
        }
    }

    pub fn into_trace(self, outcome: Outcome) -> Trace {
        Trace {
            states: self.visited,
            outcome,
        }
    }
}
