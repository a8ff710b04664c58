//! Program AST to x86-64 NASM assembly text.
//!
//! [`Generator`] maintains a compile-time model of the runtime stack
//! (`stack_depth`), a variable table (`vars`) mapping names to the stack
//! slot their value occupies, a `scopes` checkpoint stack for O(1) scope
//! teardown, and a monotonic `label_ctr` for unique jump-target names. It
//! never re-enters the lexer or parser; it consumes an already-built
//! [`crate::ast::Program`] and produces one assembly string.
//!
//! # Module structure
//!
//! - [`expr`] - expression lowering (`IntLit`/`Ident`/`Paren`/binary ops)
//! - [`stmt`] - statement lowering (`exit`/`print`/`let`/`assign`/`if`/`while`/scopes)
//! - [`error`] - [`CodegenError`]

mod error;
mod expr;
mod stmt;

pub use error::CodegenError;

use crate::ast::Program;

const PRINT_RAX_ROUTINE: &str = r#"_printRAX:
    mov rcx, digitSpace
    mov rbx, 10
    mov [rcx], rbx
    inc rcx
    mov [digitSpacePos], rcx
_printRAXLoop:
    mov rdx, 0
    mov rbx, 10
    div rbx
    push rax
    add rdx, 48
    mov rcx, [digitSpacePos]
    mov [rcx], dl
    inc rcx
    mov [digitSpacePos], rcx
    pop rax
    cmp rax, 0
    jne _printRAXLoop
_printRAXLoop2:
    mov rcx, [digitSpacePos]
    mov rax, 1
    mov rdi, 1
    mov rsi, rcx
    mov rdx, 1
    syscall
    mov rcx, [digitSpacePos]
    dec rcx
    mov [digitSpacePos], rcx
    cmp rcx, digitSpace
    jge _printRAXLoop2
    ret
"#;

pub struct Generator {
    output: String,
    stack_depth: usize,
    vars: Vec<(String, usize)>,
    scopes: Vec<usize>,
    label_ctr: u32,
}

impl Generator {
    pub fn new() -> Self {
        Generator {
            output: String::new(),
            stack_depth: 0,
            vars: Vec::new(),
            scopes: Vec::new(),
            label_ctr: 0,
        }
    }

    pub fn generate(mut self, program: &Program) -> Result<String, CodegenError> {
        self.emit_line("section .bss");
        self.emit_line("    digitSpace resb 100");
        self.emit_line("    digitSpacePos resb 8");
        self.emit_line("section .text");
        self.emit_line("global _start");
        self.emit_line("_start:");

        for stmt in program.stmts {
            self.gen_stmt(stmt)?;
        }

        self.emit_line("    mov rax, 60");
        self.emit_line("    mov rdi, 0");
        self.emit_line("    syscall");
        self.output.push_str(PRINT_RAX_ROUTINE);

        Ok(self.output)
    }

    fn emit_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn push(&mut self, operand: &str) {
        self.emit_line(&format!("    push {operand}"));
        self.stack_depth += 1;
    }

    fn pop(&mut self, reg: &str) {
        self.emit_line(&format!("    pop {reg}"));
        self.stack_depth -= 1;
    }

    fn mint_label(&mut self) -> String {
        let label = format!("label{}", self.label_ctr);
        self.label_ctr += 1;
        label
    }

    /// The first matching variable's slot, searching in declaration order
    /// (shadowing by re-declaration is rejected at `let`, not modeled here).
    fn find_var(&self, name: &str) -> Option<usize> {
        self.vars
            .iter()
            .find(|(var_name, _)| var_name == name)
            .map(|(_, slot)| *slot)
    }

    fn is_declared(&self, name: &str) -> bool {
        self.vars.iter().any(|(var_name, _)| var_name == name)
    }

    /// The memory operand addressing a variable's slot, given the current
    /// `stack_depth`.
    fn var_operand(&self, slot: usize) -> String {
        let offset = 8 * (self.stack_depth - slot - 1);
        format!("QWORD [rsp + {offset}]")
    }

    fn enter_scope(&mut self) {
        self.scopes.push(self.vars.len());
    }

    /// Collapses the release of every variable declared since the matching
    /// `enter_scope` into a single `add rsp, 8*n`, per the O(1) teardown
    /// requirement.
    fn exit_scope(&mut self) {
        let checkpoint = self.scopes.pop().expect("exit_scope without enter_scope");
        let n = self.vars.len() - checkpoint;
        if n > 0 {
            self.emit_line(&format!("    add rsp, {}", 8 * n));
            self.stack_depth -= n;
            self.vars.truncate(checkpoint);
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new()
    }
}
