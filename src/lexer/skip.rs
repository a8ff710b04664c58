//! Whitespace and comment skipping.

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.current_char() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_char(1) == Some('/') => {
                    self.skip_line_comment();
                }
                Some('/') if self.peek_char(1) == Some('*') => {
                    self.skip_block_comment();
                }
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.advance(); // first '/'
        self.advance(); // second '/'
        while let Some(c) = self.current_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Consumes through `*/` inclusive. Tolerates an unterminated comment by
    /// running out at end-of-input rather than failing.
    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'
        loop {
            match self.current_char() {
                None => break,
                Some('*') if self.peek_char(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }
}
