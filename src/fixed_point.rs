//! Fixed-point runs: a source text is wrapped into a program printing that
//! very text, and the program is run.

use std::fs;
use std::io;
use std::path::Path;

use crate::generator::generate;
use crate::interpreter::{interpret, InterpretError};
use crate::journal::Journal;
use crate::program::Program;

/// First line of every fixed-point text.
pub const HEADER: &str = "# Fixed-point program";

pub fn read_source(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(path)
}

/// f(source): the program printing [`HEADER`], `source` and the input.
pub fn fixed_point_program(source: &str, input: Option<&str>) -> Program {
    generate(&format!("{}\n{}", HEADER, source), input)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Success,
    Failure(InterpretError),
}

/// Outcome of running one program.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub program: Program,
    pub status: Status,
    /// Printed text, empty on failure
    pub output: String,
}

impl Run {
    pub fn of(program: Program) -> Self {
        match interpret(program.as_str()) {
            Ok(output) => Run {
                program,
                status: Status::Success,
                output,
            },
            Err(e) => Run {
                program,
                status: Status::Failure(e),
                output: String::new(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Process exit code: 0 on success, 1 on any interpretation failure.
    pub fn exit_code(&self) -> u8 {
        match self.status {
            Status::Success => 0,
            Status::Failure(_) => 1,
        }
    }

    /// Hands the run to `journal` as `(action, result)`, where `result` is
    /// the output or the error message.
    pub fn record<J>(&self, action: &str, journal: &mut J) -> io::Result<()>
    where
        J: Journal + ?Sized,
    {
        match &self.status {
            Status::Success => journal.record(action, &self.output),
            Status::Failure(e) => journal.record(&format!("{} failed", action), &e.to_string()),
        }
    }
}

/// Runs the fixed-point program of `source` and `input`.
pub fn run_on_source(source: &str, input: Option<&str>) -> Run {
    Run::of(fixed_point_program(source, input))
}
