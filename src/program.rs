use std::fmt::{self, Display, Formatter};

use crate::interpreter::{InterpretError, Result};
use crate::syntax::{self, Line};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Print(Value),
}

/// TinyLang program text. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program(String);

impl Program {
    pub fn new(text: impl Into<String>) -> Self {
        Program(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }

    pub fn statements(&self) -> impl Iterator<Item = Result<(usize, Statement)>> + '_ {
        statements(&self.0)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Program {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Program {
    fn from(text: String) -> Self {
        Program(text)
    }
}

impl From<&str> for Program {
    fn from(text: &str) -> Self {
        Program(text.to_string())
    }
}

/// Statements of `text` in order, paired with their 1-based line numbers.
/// Blank and comment lines are skipped.
pub fn statements(text: &str) -> impl Iterator<Item = Result<(usize, Statement)>> + '_ {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = index + 1;
            match syntax::line(raw) {
                Line::Skip => None,
                Line::Print(literal) => Some(
                    syntax::parse(syntax::literal, literal)
                        .map(|value| (line, Statement::Print(value)))
                        .map_err(|source| InterpretError::LiteralParse { line, source }),
                ),
                Line::Unknown(text) => Some(Err(InterpretError::UnknownStatement {
                    line,
                    text: text.to_string(),
                })),
            }
        })
}
