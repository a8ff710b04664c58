//! Statement and control-flow lowering.

use super::Generator;
use super::error::CodegenError;
use crate::ast::{IfPred, Scope, Stmt};
use crate::token::TokenKind;

impl Generator {
    pub(super) fn gen_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match stmt {
            Stmt::Exit(expr) => {
                self.gen_expr(expr)?;
                self.emit_line("    mov rax, 60");
                self.pop("rdi");
                self.emit_line("    syscall");
                Ok(())
            }
            Stmt::Print(expr) => {
                self.gen_expr(expr)?;
                self.pop("rax");
                self.emit_line("    call _printRAX");
                Ok(())
            }
            Stmt::Let(ident, expr) => {
                let TokenKind::Ident(name) = &ident.kind else {
                    unreachable!("Stmt::Let always carries an ident token");
                };
                if self.is_declared(name) {
                    return Err(CodegenError::DuplicateLet {
                        name: name.clone(),
                        line: ident.line,
                    });
                }
                // Record the slot before lowering the initializer: the slot
                // equals the post-push position of the value `expr` produces.
                self.vars.push((name.clone(), self.stack_depth));
                self.gen_expr(expr)?;
                Ok(())
            }
            Stmt::Assign(ident, expr) => {
                let TokenKind::Ident(name) = &ident.kind else {
                    unreachable!("Stmt::Assign always carries an ident token");
                };
                let slot = self.find_var(name).ok_or_else(|| CodegenError::UndeclaredIdentifier {
                    name: name.clone(),
                    line: ident.line,
                })?;
                self.gen_expr(expr)?;
                self.pop("rax");
                let operand = self.var_operand(slot);
                self.emit_line(&format!("    mov {operand}, rax"));
                Ok(())
            }
            Stmt::Block(scope) => self.gen_scope(scope),
            Stmt::If(expr, body, pred) => self.gen_if(expr, body, *pred),
            Stmt::While(expr, body) => self.gen_while(expr, body),
        }
    }

    pub(super) fn gen_scope(&mut self, scope: &Scope) -> Result<(), CodegenError> {
        self.enter_scope();
        for stmt in scope.stmts {
            self.gen_stmt(stmt)?;
        }
        self.exit_scope();
        Ok(())
    }

    fn gen_if(
        &mut self,
        expr: &crate::ast::Expr,
        body: &Scope,
        pred: Option<&IfPred>,
    ) -> Result<(), CodegenError> {
        self.gen_expr(expr)?;
        self.pop("rax");
        self.emit_line("    test rax, rax");
        let else_label = self.mint_label();
        self.emit_line(&format!("    jz {else_label}"));
        self.gen_scope(body)?;

        match pred {
            None => {
                self.emit_line(&format!("{else_label}:"));
            }
            Some(pred) => {
                let end_label = self.mint_label();
                self.emit_line(&format!("    jmp {end_label}"));
                self.emit_line(&format!("{else_label}:"));
                self.gen_if_pred(pred, &end_label)?;
                self.emit_line(&format!("{end_label}:"));
            }
        }
        Ok(())
    }

    fn gen_if_pred(&mut self, pred: &IfPred, end_label: &str) -> Result<(), CodegenError> {
        match pred {
            IfPred::Elif(expr, body, next) => {
                self.gen_expr(expr)?;
                self.pop("rax");
                let skip_label = self.mint_label();
                self.emit_line("    test rax, rax");
                self.emit_line(&format!("    jz {skip_label}"));
                self.gen_scope(body)?;
                self.emit_line(&format!("    jmp {end_label}"));
                if let Some(next) = next {
                    self.emit_line(&format!("{skip_label}:"));
                    self.gen_if_pred(next, end_label)?;
                }
                Ok(())
            }
            IfPred::Else(body) => self.gen_scope(body),
        }
    }

    fn gen_while(&mut self, expr: &crate::ast::Expr, body: &Scope) -> Result<(), CodegenError> {
        let top_label = self.mint_label();
        let end_label = self.mint_label();
        self.emit_line(&format!("{top_label}:"));
        self.gen_expr(expr)?;
        self.pop("rax");
        self.emit_line("    test rax, rax");
        self.emit_line(&format!("    jz {end_label}"));
        self.gen_scope(body)?;
        self.emit_line(&format!("    jmp {top_label}"));
        self.emit_line(&format!("{end_label}:"));
        Ok(())
    }
}
