pub type LexResult<T> = Result<T, LexError>;

/// Lexical failures. The first one encountered ends the scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("[line {line}] Error: Unexpected character '{ch}'.")]
    UnexpectedCharacter { line: usize, ch: char },

    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },
}

impl LexError {
    pub fn unexpected_character(line: usize, ch: char) -> Self {
        Self::UnexpectedCharacter { line, ch }
    }

    pub fn unterminated_string(line: usize) -> Self {
        Self::UnterminatedString { line }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }

    /// Diagnostic text without the `[line L] Error:` prefix.
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedCharacter { ch, .. } => format!("Unexpected character '{}'.", ch),
            Self::UnterminatedString { .. } => "Unterminated string.".to_string(),
        }
    }
}
