use thiserror::Error;

use crate::execution;
use crate::syntax::SyntaxError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpretError {
    #[error("Failed to parse literal on line {line}: {source}")]
    LiteralParse { line: usize, source: SyntaxError },

    #[error("Unknown statement on line {line}: {text:?}")]
    UnknownStatement { line: usize, text: String },
}

impl InterpretError {
    /// 1-based line the error occurred on
    pub fn line(&self) -> usize {
        match self {
            InterpretError::LiteralParse { line, .. } | InterpretError::UnknownStatement { line, .. } => {
                *line
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InterpretError>;

/// Interprets a TinyLang program, returning the printed lines joined with
/// `'\n'`.
///
/// Interpretation aborts on the first malformed line; no partial output is
/// returned in that case.
pub fn interpret(program: &str) -> Result<String> {
    let mut output: Vec<String> = Vec::new();
    execution::run(program, &mut output)?;
    Ok(output.join("\n"))
}
