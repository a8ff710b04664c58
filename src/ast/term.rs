//! Leaf expression forms.

use crate::ast::Expr;
use crate::token::Token;

/// One of the three shapes an expression bottoms out at.
#[derive(Debug)]
pub enum Term<'arena> {
    IntLit(Token),
    Ident(Token),
    Paren(&'arena Expr<'arena>),
}
