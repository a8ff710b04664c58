//! The Flit programming language compiler.
//!
//! A whole-program, single-pass compiler for a tiny imperative language,
//! emitting x86-64 Linux assembly and linking it with `nasm`/`ld`.
//!
//! # Modules
//!
//! - [`token`] - token kinds and line tagging
//! - [`lexer`] - tokenization
//! - [`arena`] - bump allocation backing the AST
//! - [`ast`] - abstract syntax tree definitions
//! - [`parser`] - recursive descent parsing with precedence climbing
//! - [`codegen`] - stack-machine code generation to NASM assembly
//! - [`driver`] - orchestrates a full compile, assemble, and link
//! - [`diagnostics`] - source-annotated error reporting
//!
//! # Example
//!
//! ```no_run
//! use flit::arena::Arena;
//! use flit::lexer::Lexer;
//! use flit::parser::Parser;
//! use flit::codegen::Generator;
//!
//! let source = "exit(0);";
//! let arena = Arena::new();
//! let tokens = Lexer::new(source).tokenize().expect("lex error");
//! let program = Parser::new(&arena, tokens).parse_program().expect("parse error");
//! let assembly = Generator::new().generate(&program).expect("codegen error");
//! ```

pub mod arena;
pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod driver;
pub mod lexer;
pub mod parser;
pub mod token;
