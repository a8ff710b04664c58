//! Code-generation (semantic) error type.

/// Errors detected while lowering a `Program` to assembly: the only two
/// semantic checks this language performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    UndeclaredIdentifier { name: String, line: u32 },
    DuplicateLet { name: String, line: u32 },
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodegenError::UndeclaredIdentifier { name, line } => {
                write!(
                    f,
                    "[Semantic Error] Undeclared identifier '{name}' on line {line}"
                )
            }
            CodegenError::DuplicateLet { name, line } => {
                write!(
                    f,
                    "[Semantic Error] Identifier already used '{name}' on line {line}"
                )
            }
        }
    }
}

impl std::error::Error for CodegenError {}
