//! devac-lex - Lexical analysis for the devac source language.
//!
//! Turns a UTF-8 source buffer into a stream of [`Token`]s. The language's
//! twelve keywords are spelled in Devanagari; everything else an ASCII
//! letter, underscore, or Devanagari run can name is an identifier. See
//! [`scanner::Scanner`] for the algorithm and [`unicode`] for the byte-level
//! classification it relies on.

mod scanner;
mod token;
mod unicode;

pub use scanner::Scanner;
pub use token::{Keyword, NumberLiteral, Punct, Token, TokenKind};

#[cfg(test)]
mod edge_cases;
