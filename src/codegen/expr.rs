//! Expression lowering.
//!
//! Every expression leaves exactly one 8-byte value on top of the runtime
//! stack and raises `stack_depth` by exactly 1.

use super::Generator;
use super::error::CodegenError;
use crate::ast::{BinExpr, Expr, Term};
use crate::token::TokenKind;

impl Generator {
    pub(super) fn gen_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match expr {
            Expr::Term(term) => self.gen_term(term),
            Expr::Bin(bin) => self.gen_bin_expr(bin),
        }
    }

    fn gen_term(&mut self, term: &Term) -> Result<(), CodegenError> {
        match term {
            Term::IntLit(token) => {
                let TokenKind::IntLit(digits) = &token.kind else {
                    unreachable!("Term::IntLit always carries an int_lit token");
                };
                self.emit_line(&format!("    mov rax, {digits}"));
                self.push("rax");
                Ok(())
            }
            Term::Ident(token) => {
                let TokenKind::Ident(name) = &token.kind else {
                    unreachable!("Term::Ident always carries an ident token");
                };
                let slot = self.find_var(name).ok_or_else(|| CodegenError::UndeclaredIdentifier {
                    name: name.clone(),
                    line: token.line,
                })?;
                let operand = self.var_operand(slot);
                self.push(&operand);
                Ok(())
            }
            Term::Paren(inner) => self.gen_expr(inner),
        }
    }

    /// Lowers RHS before LHS so that, after two pops, `rax` holds the left
    /// operand and `rbx` holds the right one.
    fn gen_bin_expr(&mut self, bin: &BinExpr) -> Result<(), CodegenError> {
        let (lhs, rhs) = match bin {
            BinExpr::Add(l, r) | BinExpr::Sub(l, r) | BinExpr::Mul(l, r) | BinExpr::Div(l, r) => {
                (l, r)
            }
        };
        self.gen_expr(rhs)?;
        self.gen_expr(lhs)?;
        self.pop("rax");
        self.pop("rbx");
        match bin {
            BinExpr::Add(..) => self.emit_line("    add rax, rbx"),
            BinExpr::Sub(..) => self.emit_line("    sub rax, rbx"),
            BinExpr::Mul(..) => self.emit_line("    mul rbx"),
            BinExpr::Div(..) => {
                self.emit_line("    mov rdx, 0");
                self.emit_line("    div rbx");
            }
        }
        self.push("rax");
        Ok(())
    }
}
