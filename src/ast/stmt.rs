//! Statements, if-predicates, scopes, and the program root.

use crate::ast::Expr;
use crate::token::Token;

/// An ordered sequence of statements sharing one scope.
#[derive(Debug)]
pub struct Scope<'arena> {
    pub stmts: &'arena [&'arena Stmt<'arena>],
}

/// The `elif`/`else` tail of an `if`. `Elif` chains further via its optional
/// trailing predicate; `Else` terminates the chain.
#[derive(Debug)]
pub enum IfPred<'arena> {
    Elif(
        &'arena Expr<'arena>,
        Scope<'arena>,
        Option<&'arena IfPred<'arena>>,
    ),
    Else(Scope<'arena>),
}

/// A single statement.
#[derive(Debug)]
pub enum Stmt<'arena> {
    Exit(&'arena Expr<'arena>),
    Print(&'arena Expr<'arena>),
    Let(Token, &'arena Expr<'arena>),
    Assign(Token, &'arena Expr<'arena>),
    Block(Scope<'arena>),
    If(&'arena Expr<'arena>, Scope<'arena>, Option<&'arena IfPred<'arena>>),
    While(&'arena Expr<'arena>, Scope<'arena>),
}

/// The root of a parsed translation unit: an ordered sequence of top-level
/// statements.
#[derive(Debug)]
pub struct Program<'arena> {
    pub stmts: &'arena [&'arena Stmt<'arena>],
}
