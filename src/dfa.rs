mod builder;
mod dfa;
mod simulator;

pub use self::dfa::{build_automaton, Automaton, State, StateId};
pub use self::simulator::{Outcome, Rejection, Trace};
pub(crate) use self::dfa::Transition;
