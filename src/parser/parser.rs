use std::iter::Peekable;
use std::vec::IntoIter;

use log::debug;

use super::ast::*;
use crate::config::{Config, END_MARKER};
use crate::error::{BuildError, ParseError, Resource};

pub struct Parser<'a> {
    stream: Peekable<IntoIter<(usize, char)>>,
    length: usize,
    config: &'a Config,
    nodes: Vec<NodeKind>,
    symbols: Vec<char>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Parses `pattern` and returns the tree of the augmented pattern
    /// `(pattern)#`.
    pub fn parse(pattern: &str, config: &'a Config) -> Result<SyntaxTree, BuildError> {
        config.validate()?;

        let chars: Vec<(usize, char)> = pattern.chars().enumerate().collect();
        let mut parser = Parser {
            length: chars.len(),
            stream: chars.into_iter().peekable(),
            config,
            nodes: Vec::new(),
            symbols: Vec::new(),
            depth: 0,
        };

        let root = parser.parse_regex()?;
        if let Some((offset, ch)) = parser.stream.next() {
            return Err(ParseError::UnexpectedCharacter { ch, offset }.into());
        }

        // augment
        let end = parser.push_leaf(END_MARKER)?;
        parser.push(NodeKind::Concat(root, end));

        debug!(
            "parsed {:?}: {} nodes, {} positions",
            pattern,
            parser.nodes.len(),
            parser.symbols.len()
        );

        Ok(SyntaxTree {
            nodes: parser.nodes,
            symbols: parser.symbols,
        })
    }

    fn parse_regex(&mut self) -> Result<NodeId, BuildError> {
        let mut lhs = self.parse_term()?;

        while let Some(&(offset, '|')) = self.stream.peek() {
            self.stream.next();

            match self.stream.peek() {
                None | Some((_, ')')) | Some((_, '|')) => {
                    return Err(ParseError::EmptyAlternative { offset }.into());
                }
                _ => {}
            }

            let rhs = self.parse_term()?;
            lhs = self.push(NodeKind::Union(lhs, rhs));
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<NodeId, BuildError> {
        let mut lhs = self.parse_factor()?;

        while let Some(&(_, c)) = self.stream.peek() {
            if c == '|' || c == ')' {
                break;
            }

            let rhs = self.parse_factor()?;
            lhs = self.push(NodeKind::Concat(lhs, rhs));
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<NodeId, BuildError> {
        let base = self.parse_base()?;

        match self.stream.next_if(|&(_, c)| c == '*') {
            Some(_) => Ok(self.push(NodeKind::Star(base))),
            None => Ok(base),
        }
    }

    fn parse_base(&mut self) -> Result<NodeId, BuildError> {
        match self.stream.next() {
            Some((offset, '(')) => self.parse_group(offset),
            Some((offset, '|')) => Err(ParseError::EmptyAlternative { offset }.into()),
            Some((offset, ch)) if ch == ')' || ch == '*' => {
                Err(ParseError::UnexpectedCharacter { ch, offset }.into())
            }
            Some((offset, ch)) => self.parse_symbol(ch, offset),
            None => Err(ParseError::UnexpectedEndOfInput {
                offset: self.length,
            }
            .into()),
        }
    }

    fn parse_group(&mut self, open: usize) -> Result<NodeId, BuildError> {
        if self.depth == self.config.max_depth {
            return Err(BuildError::exhausted(
                Resource::NestingDepth,
                self.config.max_depth,
            ));
        }

        self.depth += 1;
        let node = self.parse_regex()?;
        self.depth -= 1;

        match self.stream.next() {
            Some((_, ')')) => Ok(node),
            _ => Err(ParseError::UnmatchedParenthesis { offset: open }.into()),
        }
    }

    fn parse_symbol(&mut self, ch: char, offset: usize) -> Result<NodeId, BuildError> {
        if !self.config.alphabet.contains(ch) {
            return Err(ParseError::UnknownSymbol { ch, offset }.into());
        }
        self.push_leaf(ch)
    }

    fn push_leaf(&mut self, symbol: char) -> Result<NodeId, BuildError> {
        if self.symbols.len() >= self.config.max_positions {
            return Err(BuildError::exhausted(
                Resource::Positions,
                self.config.max_positions,
            ));
        }

        self.symbols.push(symbol);
        let position = self.symbols.len();
        Ok(self.push(NodeKind::Leaf { symbol, position }))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(kind);
        NodeId(self.nodes.len() - 1)
    }
}
