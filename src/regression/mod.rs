mod bad_programs;
mod fixed_point;
mod literals;

use crate::interpreter::{interpret, InterpretError};

pub fn run(program: &str) -> String {
    let first = interpret(program).unwrap();
    // no hidden state between runs
    assert_eq!(interpret(program), Ok(first.clone()));
    first
}

pub fn fail(program: &str) -> InterpretError {
    let error = interpret(program).unwrap_err();
    assert_eq!(interpret(program), Err(error.clone()));
    error
}
