mod config;
mod dfa;
mod error;
mod inspect;
mod parser;
mod positions;

pub use config::{Alphabet, Config, END_MARKER};
pub use dfa::{build_automaton, Automaton, Outcome, Rejection, State, StateId, Trace};
pub use error::{BuildError, ParseError, Resource};
pub use inspect::{FollowposRow, NodeLabel, StateRow, TransitionTable, TreeRow};
pub use parser::ast::{NodeId, NodeKind, Position, PositionSet, SyntaxTree};
pub use parser::Parser;
pub use positions::{Annotations, Attributes, Followpos};
