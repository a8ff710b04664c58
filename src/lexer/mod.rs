//! Lexical analysis: source text to an ordered token sequence.
//!
//! # Overview
//!
//! [`Lexer`] makes a single forward pass over the source characters with one
//! character of lookahead (two for `//` and `/*`). It classifies words as
//! keywords or identifiers, accumulates digit runs into integer literals,
//! strips line and block comments, and emits single-character punctuation
//! tokens directly. Every emitted token is tagged with the 1-based line it
//! begins on.
//!
//! # Supported tokens
//!
//! See [`crate::token::TokenKind`] for the closed set.
//!
//! # Module structure
//!
//! - [`cursor`] - character-level advance/peek primitives
//! - [`skip`] - whitespace and comment skipping
//! - [`tokens`] - per-kind classification (`next_token` and friends)
//! - [`error`] - [`LexError`]

mod cursor;
mod error;
mod skip;
mod tokens;

pub use error::LexError;

use crate::token::Token;

pub struct Lexer<'a> {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    _source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            _source: source,
        }
    }

    /// Lexes the whole source to completion, or fails on the first
    /// character that cannot begin a token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while !self.is_eof() {
            match self.next_token() {
                Some(Ok(token)) => tokens.push(token),
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
        Ok(tokens)
    }
}
