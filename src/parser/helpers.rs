//! Token-navigation primitives.
//!
//! Every lookahead here is `Option`-returning; none dereference a token that
//! might not exist before checking for its presence (see `DESIGN.md`, open
//! question 2).

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl<'arena> Parser<'arena> {
    /// The token `offset` positions ahead of the cursor, or `None` past the
    /// end of the stream.
    pub(super) fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// The line of the most recently consumed token, for error reporting.
    /// Before anything has been consumed, falls back to the first token's
    /// line (or line 1 on a completely empty token stream).
    pub(super) fn last_consumed_line(&self) -> u32 {
        if self.pos == 0 {
            self.tokens.first().map(|t| t.line).unwrap_or(1)
        } else {
            self.tokens[self.pos - 1].line
        }
    }

    /// Returns the current token and advances, or `None` at end of input.
    pub(super) fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the current token only if its kind matches `kind`.
    pub(super) fn try_take(&mut self, kind: &TokenKind) -> Option<Token> {
        if self.peek(0).map(|t| &t.kind) == Some(kind) {
            self.consume()
        } else {
            None
        }
    }

    /// Consumes the current token if it matches `kind`, else fails with
    /// `expected` as the human label.
    pub(super) fn expect(
        &mut self,
        kind: &TokenKind,
        expected: &str,
    ) -> Result<Token, ParseError> {
        self.try_take(kind).ok_or_else(|| ParseError {
            expected: expected.to_string(),
            line: self.last_consumed_line(),
        })
    }

    pub(super) fn error(&self, expected: &str) -> ParseError {
        ParseError {
            expected: expected.to_string(),
            line: self.last_consumed_line(),
        }
    }
}
