//! Lexical error type.

/// A character was encountered that cannot begin any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub line: u32,
    pub character: char,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Lexing Error] Unrecognized character '{}' on line {}",
            self.character, self.line
        )
    }
}

impl std::error::Error for LexError {}
