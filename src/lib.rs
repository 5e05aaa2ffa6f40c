//! TinyLang: a language whose only statement is `PRINT <literal>`, and a
//! generator of TinyLang programs that print the text they were generated
//! from.
//!
//! ```
//! let program = fixpoint::generate("hello", Some("world"));
//! assert_eq!(program.as_str(), "PRINT 'hello\\n# User input: world'");
//! assert_eq!(
//!     fixpoint::interpret(program.as_str()).unwrap(),
//!     "hello\n# User input: world"
//! );
//! ```

pub mod execution;
pub mod fixed_point;
pub mod generator;
pub mod interpreter;
pub mod io;
pub mod journal;
pub mod program;
#[cfg(test)]
mod regression;
pub mod shell;
pub mod syntax;
pub mod value;

pub use crate::generator::generate;
pub use crate::interpreter::{interpret, InterpretError};
pub use crate::program::{Program, Statement};
pub use crate::value::Value;
