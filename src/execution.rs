use crate::interpreter::Result;
use crate::io::OutputStream;
use crate::program::{self, Statement};

pub struct ExecutionContext<'a, O> {
    output: &'a mut O,
    printed: usize,
}

impl<O> ExecutionContext<'_, O>
where
    O: OutputStream,
{
    pub fn new(output: &mut O) -> ExecutionContext<'_, O> {
        ExecutionContext { output, printed: 0 }
    }

    /// Runs `program` line by line, stopping at the first error. Lines
    /// printed before the error stay printed.
    pub fn run(&mut self, program: &str) -> Result<usize> {
        for statement in program::statements(program) {
            let (_line, statement) = statement?;
            self.execute(&statement);
        }

        Ok(self.printed)
    }

    fn execute(&mut self, statement: &Statement) {
        match statement {
            Statement::Print(value) => {
                self.output.write(value.to_string());
                self.printed += 1;
            }
        }
    }
}

/// Runs `program`, streaming printed lines into `output`.
pub fn run<O>(program: &str, output: &mut O) -> Result<usize>
where
    O: OutputStream,
{
    ExecutionContext::new(output).run(program)
}
