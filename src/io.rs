use std::io::{Stdout, Write};

/// Receives the lines a program prints.
pub trait OutputStream {
    fn write(&mut self, line: String);
}

impl OutputStream for Stdout {
    fn write(&mut self, line: String) {
        // nothing sensible to do about a closed stdout
        let _ = writeln!(self.lock(), "{}", line);
    }
}

impl OutputStream for Vec<String> {
    fn write(&mut self, line: String) {
        self.push(line)
    }
}
