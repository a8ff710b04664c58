//! Recursive-descent parser with precedence climbing.
//!
//! # Grammar
//!
//! ```text
//! program    → stmt*
//! stmt       → "exit" "(" expr ")" ";"
//!            | "let" ident "=" expr ";"
//!            | ident "=" expr ";"
//!            | "print" "(" expr ")" ";"
//!            | scope
//!            | "if" "(" expr ")" scope if_pred?
//!            | "while" "(" expr ")" scope
//! if_pred    → "elif" "(" expr ")" scope if_pred?
//!            | "else" scope
//! scope      → "{" stmt* "}"
//! expr       → term (bin_op expr)*            (precedence-climbed)
//! term       → int_lit | ident | "(" expr ")"
//! ```
//!
//! # Module structure
//!
//! - [`helpers`] - token-navigation primitives
//! - [`error`] - [`ParseError`]

mod error;
mod helpers;

pub use error::ParseError;

use crate::arena::Arena;
use crate::ast::{BinExpr, Expr, IfPred, Program, Scope, Stmt, Term};
use crate::token::{Token, TokenKind};

pub struct Parser<'arena> {
    arena: &'arena Arena,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'arena> Parser<'arena> {
    pub fn new(arena: &'arena Arena, tokens: Vec<Token>) -> Self {
        Parser {
            arena,
            tokens,
            pos: 0,
        }
    }

    pub fn parse_program(mut self) -> Result<Program<'arena>, ParseError> {
        let mut stmts = Vec::new();
        while self.pos < self.tokens.len() {
            match self.parse_stmt()? {
                Some(stmt) => stmts.push(stmt),
                None => return Err(self.error("a statement")),
            }
        }
        Ok(Program {
            stmts: self.arena.alloc_slice(stmts),
        })
    }

    fn parse_term(&mut self) -> Result<Option<Term<'arena>>, ParseError> {
        if matches!(self.peek(0).map(|t| &t.kind), Some(TokenKind::IntLit(_))) {
            let token = self.consume().expect("peeked int_lit must consume");
            return Ok(Some(Term::IntLit(token)));
        }
        if matches!(self.peek(0).map(|t| &t.kind), Some(TokenKind::Ident(_))) {
            let token = self.consume().expect("peeked ident must consume");
            return Ok(Some(Term::Ident(token)));
        }
        if self.try_take(&TokenKind::OpenParen).is_some() {
            let inner = self
                .parse_expr(0)?
                .ok_or_else(|| self.error("an expression"))?;
            self.expect(&TokenKind::CloseParen, "`)`")?;
            return Ok(Some(Term::Paren(inner)));
        }
        Ok(None)
    }

    fn parse_expr(&mut self, min_prec: u8) -> Result<Option<&'arena Expr<'arena>>, ParseError> {
        let Some(term) = self.parse_term()? else {
            return Ok(None);
        };
        let mut lhs: &'arena Expr<'arena> = self.arena.alloc(Expr::Term(term));

        loop {
            let Some(prec) = self.peek(0).and_then(|t| t.kind.bin_prec()) else {
                break;
            };
            if prec < min_prec {
                break;
            }
            let op = self.consume().expect("peeked operator must consume");
            let rhs = self
                .parse_expr(prec + 1)?
                .ok_or_else(|| self.error("an expression"))?;
            let bin = match op.kind {
                TokenKind::Plus => BinExpr::Add(lhs, rhs),
                TokenKind::Minus => BinExpr::Sub(lhs, rhs),
                TokenKind::Multi => BinExpr::Mul(lhs, rhs),
                TokenKind::Div => BinExpr::Div(lhs, rhs),
                _ => unreachable!("bin_prec only returns Some for +-*/"),
            };
            lhs = self.arena.alloc(Expr::Bin(bin));
        }

        Ok(Some(lhs))
    }

    fn parse_scope(&mut self) -> Result<Option<Scope<'arena>>, ParseError> {
        if self.try_take(&TokenKind::OpenCurly).is_none() {
            return Ok(None);
        }
        let mut stmts = Vec::new();
        loop {
            if self.try_take(&TokenKind::CloseCurly).is_some() {
                break;
            }
            match self.parse_stmt()? {
                Some(stmt) => stmts.push(stmt),
                None => return Err(self.error("`}`")),
            }
        }
        Ok(Some(Scope {
            stmts: self.arena.alloc_slice(stmts),
        }))
    }

    fn parse_if_pred(&mut self) -> Result<Option<&'arena IfPred<'arena>>, ParseError> {
        if self.try_take(&TokenKind::Elif).is_some() {
            self.expect(&TokenKind::OpenParen, "`(`")?;
            let expr = self
                .parse_expr(0)?
                .ok_or_else(|| self.error("an expression"))?;
            self.expect(&TokenKind::CloseParen, "`)`")?;
            let scope = self.parse_scope()?.ok_or_else(|| self.error("`{`"))?;
            let next = self.parse_if_pred()?;
            return Ok(Some(self.arena.alloc(IfPred::Elif(expr, scope, next))));
        }
        if self.try_take(&TokenKind::Else).is_some() {
            let scope = self.parse_scope()?.ok_or_else(|| self.error("`{`"))?;
            return Ok(Some(self.arena.alloc(IfPred::Else(scope))));
        }
        Ok(None)
    }

    fn parse_stmt(&mut self) -> Result<Option<&'arena Stmt<'arena>>, ParseError> {
        if matches!(self.peek(0).map(|t| &t.kind), Some(TokenKind::Exit))
            && matches!(self.peek(1).map(|t| &t.kind), Some(TokenKind::OpenParen))
        {
            self.consume();
            self.consume();
            let expr = self
                .parse_expr(0)?
                .ok_or_else(|| self.error("an expression"))?;
            self.expect(&TokenKind::CloseParen, "`)`")?;
            self.expect(&TokenKind::Semi, "`;`")?;
            return Ok(Some(self.arena.alloc(Stmt::Exit(expr))));
        }

        if matches!(self.peek(0).map(|t| &t.kind), Some(TokenKind::Let))
            && matches!(self.peek(1).map(|t| &t.kind), Some(TokenKind::Ident(_)))
            && matches!(self.peek(2).map(|t| &t.kind), Some(TokenKind::Eq))
        {
            self.consume();
            let ident = self.consume().expect("peeked ident must consume");
            self.consume();
            let expr = self
                .parse_expr(0)?
                .ok_or_else(|| self.error("an expression"))?;
            self.expect(&TokenKind::Semi, "`;`")?;
            return Ok(Some(self.arena.alloc(Stmt::Let(ident, expr))));
        }

        if matches!(self.peek(0).map(|t| &t.kind), Some(TokenKind::Ident(_)))
            && matches!(self.peek(1).map(|t| &t.kind), Some(TokenKind::Eq))
        {
            let ident = self.consume().expect("peeked ident must consume");
            self.consume();
            let expr = self
                .parse_expr(0)?
                .ok_or_else(|| self.error("an expression"))?;
            self.expect(&TokenKind::Semi, "`;`")?;
            return Ok(Some(self.arena.alloc(Stmt::Assign(ident, expr))));
        }

        if matches!(self.peek(0).map(|t| &t.kind), Some(TokenKind::Print))
            && matches!(self.peek(1).map(|t| &t.kind), Some(TokenKind::OpenParen))
        {
            self.consume();
            self.consume();
            let expr = self
                .parse_expr(0)?
                .ok_or_else(|| self.error("an expression"))?;
            self.expect(&TokenKind::CloseParen, "`)`")?;
            self.expect(&TokenKind::Semi, "`;`")?;
            return Ok(Some(self.arena.alloc(Stmt::Print(expr))));
        }

        if let Some(scope) = self.parse_scope()? {
            return Ok(Some(self.arena.alloc(Stmt::Block(scope))));
        }

        if self.try_take(&TokenKind::If).is_some() {
            self.expect(&TokenKind::OpenParen, "`(`")?;
            let expr = self
                .parse_expr(0)?
                .ok_or_else(|| self.error("an expression"))?;
            self.expect(&TokenKind::CloseParen, "`)`")?;
            let scope = self.parse_scope()?.ok_or_else(|| self.error("`{`"))?;
            let pred = self.parse_if_pred()?;
            return Ok(Some(self.arena.alloc(Stmt::If(expr, scope, pred))));
        }

        if self.try_take(&TokenKind::While).is_some() {
            self.expect(&TokenKind::OpenParen, "`(`")?;
            let expr = self
                .parse_expr(0)?
                .ok_or_else(|| self.error("an expression"))?;
            self.expect(&TokenKind::CloseParen, "`)`")?;
            let scope = self.parse_scope()?.ok_or_else(|| self.error("`{`"))?;
            return Ok(Some(self.arena.alloc(Stmt::While(expr, scope))));
        }

        Ok(None)
    }
}
