use std::fmt;

use thiserror::Error;

/// A bounded resource of a single automaton build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Positions,
    States,
    Symbols,
    NestingDepth,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Positions => "positions",
            Resource::States => "DFA states",
            Resource::Symbols => "alphabet symbols",
            Resource::NestingDepth => "nested groups",
        };
        f.write_str(name)
    }
}

/// Syntax errors of a raw pattern. Offsets count characters of the raw
/// (non-augmented) pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of pattern at offset {offset}")]
    UnexpectedEndOfInput { offset: usize },

    #[error("unmatched opening parenthesis at offset {offset}")]
    UnmatchedParenthesis { offset: usize },

    #[error("missing term of the union operator at offset {offset}")]
    EmptyAlternative { offset: usize },

    #[error("unexpected '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },

    #[error("symbol '{ch}' at offset {offset} is not in the alphabet")]
    UnknownSymbol { ch: char, offset: usize },
}

/// Everything that can abort `build_automaton`. No partial automaton is
/// ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("resource exhausted: more than {limit} {resource}")]
    ResourceExhaustion { resource: Resource, limit: usize },

    #[error("'{0}' is reserved and cannot be an alphabet symbol")]
    InvalidAlphabet(char),
}

impl BuildError {
    pub(crate) fn exhausted(resource: Resource, limit: usize) -> Self {
        BuildError::ResourceExhaustion { resource, limit }
    }
}
