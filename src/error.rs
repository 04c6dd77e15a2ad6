use thiserror::Error;

/// Domain checker error types
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Invalid domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CheckerError {
    /// Line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            CheckerError::ParseErrorAtLine { line, .. }
            | CheckerError::UnexpectedEof { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
