//! Parse error type.

/// A mismatch between the expected and actual token kind.
///
/// `expected` is a human label (e.g. `` "`)`" `` or `"a statement"`);
/// `line` is the line of the most recently consumed token, per the
/// externally observable error-message contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub expected: String,
    pub line: u32,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Parsing Error] Expected {} on line {}",
            self.expected, self.line
        )
    }
}

impl std::error::Error for ParseError {}
