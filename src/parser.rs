// syntax (like BNF)
//
// regex  = term ( '|' term ) *
// term   = factor +
// factor = base '*' ?
// base   = '(' regex ')' | symbol
//
// The parsed tree is augmented with the end marker: `(regex)#`.

pub mod ast;
mod parser;

pub use ast::SyntaxTree;
pub use parser::Parser;
