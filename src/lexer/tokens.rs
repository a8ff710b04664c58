//! Per-kind token classification routines.

use super::Lexer;
use super::error::LexError;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Produces the next token, or `None` at end of input, or fails on an
    /// unrecognized character.
    pub(super) fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        self.skip_whitespace_and_comments();
        let line = self.line;
        let c = self.current_char()?;

        if c.is_ascii_alphabetic() {
            return Some(Ok(self.read_word(line)));
        }
        if c.is_ascii_digit() {
            return Some(Ok(self.read_int_lit(line)));
        }
        if let Some(kind) = Self::punctuation_kind(c) {
            self.advance();
            return Some(Ok(Token::new(kind, line)));
        }

        self.advance();
        Some(Err(LexError { line, character: c }))
    }

    fn punctuation_kind(c: char) -> Option<TokenKind> {
        Some(match c {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ';' => TokenKind::Semi,
            '=' => TokenKind::Eq,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multi,
            '/' => TokenKind::Div,
            '{' => TokenKind::OpenCurly,
            '}' => TokenKind::CloseCurly,
            _ => return None,
        })
    }

    fn read_word(&mut self, line: u32) -> Token {
        let mut buf = String::new();
        while let Some(c) = self.current_char() {
            if c.is_ascii_alphanumeric() {
                buf.push(c);
                self.advance();
            } else {
                break;
            }
        }
        let kind = match buf.as_str() {
            "exit" => TokenKind::Exit,
            "let" => TokenKind::Let,
            "print" => TokenKind::Print,
            "if" => TokenKind::If,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            _ => TokenKind::Ident(buf),
        };
        Token::new(kind, line)
    }

    fn read_int_lit(&mut self, line: u32) -> Token {
        let mut buf = String::new();
        while let Some(c) = self.current_char() {
            if c.is_ascii_digit() {
                buf.push(c);
                self.advance();
            } else {
                break;
            }
        }
        Token::new(TokenKind::IntLit(buf), line)
    }
}
